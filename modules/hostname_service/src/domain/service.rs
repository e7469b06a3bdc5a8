//! Domain service - hostname workflow orchestration

use super::events::{EventPublisher, HostnameEvent};
use super::ports::{AccountSubsystem, ConfigStore, DeviceInfo, TextSanitizer};
use super::server_host::ServerHost;
use super::validation::normalize_hostname;
use crate::contract::{
    AccountTransaction, HostnameError, DEFAULT_SERVER_NAME, LOCAL_HOSTNAME_KEY, UNKNOWN_HOSTNAME,
};
use parking_lot::RwLock;
use std::sync::Arc;

/// Domain service for hostname management
pub struct Service {
    config_store: Arc<dyn ConfigStore>,
    /// Empty until the engine's account subsystem is initialized
    account: RwLock<Option<Arc<dyn AccountSubsystem>>>,
    sanitizer: Arc<dyn TextSanitizer>,
    device: Arc<dyn DeviceInfo>,
    event_publisher: Arc<dyn EventPublisher>,
    server_host: ServerHost,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        config_store: Arc<dyn ConfigStore>,
        account: Option<Arc<dyn AccountSubsystem>>,
        sanitizer: Arc<dyn TextSanitizer>,
        device: Arc<dyn DeviceInfo>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            config_store,
            account: RwLock::new(account),
            sanitizer,
            server_host: ServerHost::new(device.clone(), DEFAULT_SERVER_NAME),
            device,
            event_publisher,
        }
    }

    /// Override the base name used for the default server host name
    pub fn with_server_name(mut self, server_name: impl Into<String>) -> Self {
        self.server_host = ServerHost::new(self.device.clone(), server_name);
        self
    }

    /// Attach the account subsystem once it is initialized
    pub fn attach_account(&self, account: Arc<dyn AccountSubsystem>) {
        *self.account.write() = Some(account);
    }

    /// Detach the account subsystem (e.g. during engine shutdown)
    pub fn detach_account(&self) {
        *self.account.write() = None;
    }

    fn account(&self) -> Option<Arc<dyn AccountSubsystem>> {
        self.account.read().clone()
    }

    // ===== Local Hostname =====

    /// Validate, store and propagate a new local hostname
    ///
    /// The config commit and the SET_ACCOUNT_NAME transaction are not atomic:
    /// if the transaction fails the config stays committed and
    /// [`HostnameError::Propagation`] is returned.
    pub fn set_local_hostname(&self, new_hostname: &str) -> Result<(), HostnameError> {
        let hostname = normalize_hostname(new_hostname, self.sanitizer.as_ref())?;

        let account = self
            .account()
            .ok_or_else(|| HostnameError::unavailable("Account"))?;

        // Captured before set_sign_in_state and reused below, even though that
        // call may change the state.
        let state = account.state();
        let account_type = account.account_type();
        let was_signed_in = state.is_signed_in();

        account.set_sign_in_state(was_signed_in, &hostname);

        self.config_store.set(
            LOCAL_HOSTNAME_KEY,
            serde_json::Value::String(hostname.clone()),
        );
        self.config_store.commit().map_err(HostnameError::Storage)?;

        tracing::info!(
            hostname = %hostname,
            account_state = %state,
            account_type = %account_type,
            "Local hostname stored"
        );

        if was_signed_in {
            account.submit_transaction(AccountTransaction::SetAccountName {
                name: hostname.clone(),
            });
            account.run_pending_transactions().map_err(|e| {
                tracing::warn!(hostname = %hostname, error = %e, "Account name propagation failed");
                HostnameError::Propagation(e)
            })?;
        }

        let event = HostnameEvent::hostname_changed(&hostname, state, &account_type, was_signed_in);
        if let Err(e) = self.event_publisher.publish(event) {
            tracing::warn!(error = %e, "Failed to publish hostname event");
        }

        Ok(())
    }

    /// Resolve the hostname currently shown to the player
    ///
    /// Signed in: the account name. Otherwise the stored hostname, then the
    /// device name. Never fails; without an account subsystem returns
    /// [`UNKNOWN_HOSTNAME`].
    pub fn current_hostname(&self) -> String {
        let Some(account) = self.account() else {
            tracing::debug!("Account subsystem not available, hostname unknown");
            return UNKNOWN_HOSTNAME.to_string();
        };

        if account.state().is_signed_in() {
            return account.name();
        }

        match self.config_store.get(LOCAL_HOSTNAME_KEY) {
            Some(serde_json::Value::String(hostname)) if !hostname.is_empty() => hostname,
            _ => self.device.device_name(),
        }
    }

    // ===== Server Host Name =====

    pub fn server_host_name(&self) -> String {
        self.server_host.host_name()
    }

    pub fn set_server_host_name(&self, name: &str) -> Result<(), HostnameError> {
        self.server_host.set_host_name(name)?;
        tracing::info!(host_name = %name, "Server host name changed");

        if let Err(e) = self
            .event_publisher
            .publish(HostnameEvent::server_host_name_changed(name))
        {
            tracing::warn!(error = %e, "Failed to publish server host name event");
        }
        Ok(())
    }

    pub fn default_server_host_name(&self) -> String {
        self.server_host.default_host_name()
    }
}
