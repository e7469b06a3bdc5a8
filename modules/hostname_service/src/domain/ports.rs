//! Collaborator traits for the host engine
//!
//! These traits define what the service needs from the engine it runs in.
//! Implementations are in infra/ (and in test mocks).

use crate::contract::{AccountState, AccountTransaction, AccountType};
use anyhow::Result;
use serde_json::Value;

/// Persisted key-value settings mapping with explicit commit
pub trait ConfigStore: Send + Sync {
    /// Read a value; `None` when the key was never written
    fn get(&self, key: &str) -> Option<Value>;

    /// Read a value, falling back to `default` when absent
    fn get_or(&self, key: &str, default: Value) -> Value {
        self.get(key).unwrap_or(default)
    }

    /// Write a value into the in-memory mapping
    fn set(&self, key: &str, value: Value);

    /// Durably flush the mapping
    fn commit(&self) -> Result<()>;
}

/// Account subsystem tracking sign-in state and identity
pub trait AccountSubsystem: Send + Sync {
    /// Current sign-in state
    fn state(&self) -> AccountState;

    /// Type of the current account
    fn account_type(&self) -> AccountType;

    /// Display name of the current account
    fn name(&self) -> String;

    /// Update sign-in state and the in-memory display name
    fn set_sign_in_state(&self, signed_in: bool, name: &str);

    /// Queue a transaction for the next run
    fn submit_transaction(&self, transaction: AccountTransaction);

    /// Execute all queued transactions
    fn run_pending_transactions(&self) -> Result<()>;
}

/// Repairs arbitrary text into clean UTF-8
pub trait TextSanitizer: Send + Sync {
    /// `context` names the field being cleaned, for diagnostics only
    fn clean_utf8(&self, text: &str, context: &str) -> String;
}

/// Fallback identity source
pub trait DeviceInfo: Send + Sync {
    fn device_name(&self) -> String;
}
