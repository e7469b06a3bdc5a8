//! In-process account subsystem

use crate::contract::{AccountState, AccountTransaction, AccountType};
use crate::domain::ports::AccountSubsystem;
use anyhow::Result;
use parking_lot::RwLock;

struct AccountRecord {
    state: AccountState,
    account_type: AccountType,
    name: String,
    pending: Vec<AccountTransaction>,
}

/// Account record kept in memory, for local (offline) play and tests
pub struct LocalAccountSubsystem {
    record: RwLock<AccountRecord>,
}

impl LocalAccountSubsystem {
    pub fn new(account_type: AccountType, name: impl Into<String>) -> Self {
        Self {
            record: RwLock::new(AccountRecord {
                state: AccountState::SignedOut,
                account_type,
                name: name.into(),
                pending: Vec::new(),
            }),
        }
    }

    /// Local account that starts signed in
    pub fn signed_in(name: impl Into<String>) -> Self {
        let account = Self::new(AccountType::Local, name);
        account.record.write().state = AccountState::SignedIn;
        account
    }

    /// Transactions submitted but not yet run
    pub fn pending_transactions(&self) -> Vec<AccountTransaction> {
        self.record.read().pending.clone()
    }
}

impl AccountSubsystem for LocalAccountSubsystem {
    fn state(&self) -> AccountState {
        self.record.read().state
    }

    fn account_type(&self) -> AccountType {
        self.record.read().account_type.clone()
    }

    fn name(&self) -> String {
        self.record.read().name.clone()
    }

    fn set_sign_in_state(&self, signed_in: bool, name: &str) {
        let mut record = self.record.write();
        record.state = if signed_in {
            AccountState::SignedIn
        } else {
            AccountState::SignedOut
        };
        record.name = name.to_string();
    }

    fn submit_transaction(&self, transaction: AccountTransaction) {
        tracing::debug!(kind = transaction.kind(), "Account transaction queued");
        self.record.write().pending.push(transaction);
    }

    fn run_pending_transactions(&self) -> Result<()> {
        let mut record = self.record.write();
        for transaction in std::mem::take(&mut record.pending) {
            match transaction {
                AccountTransaction::SetAccountName { name } => record.name = name,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account_is_signed_out() {
        let account = LocalAccountSubsystem::new(AccountType::Device, "tablet");
        assert_eq!(account.state(), AccountState::SignedOut);
        assert_eq!(account.account_type(), AccountType::Device);
        assert_eq!(account.name(), "tablet");
    }

    #[test]
    fn test_set_sign_in_state_updates_name() {
        let account = LocalAccountSubsystem::new(AccountType::Local, "old");
        account.set_sign_in_state(true, "new");
        assert_eq!(account.state(), AccountState::SignedIn);
        assert_eq!(account.name(), "new");
    }

    #[test]
    fn test_run_pending_transactions_applies_and_drains() {
        let account = LocalAccountSubsystem::signed_in("old");
        account.submit_transaction(AccountTransaction::SetAccountName {
            name: "renamed".to_string(),
        });
        assert_eq!(account.pending_transactions().len(), 1);
        assert_eq!(account.name(), "old");

        account.run_pending_transactions().unwrap();
        assert_eq!(account.name(), "renamed");
        assert!(account.pending_transactions().is_empty());
    }
}
