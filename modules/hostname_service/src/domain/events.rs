//! Domain events for hostname service
//!
//! Events are published after a write has been committed:
//! - `hostname_changed`: local hostname stored (and propagated when signed in)
//! - `server_host_name_changed`: server host name replaced

use crate::contract::AccountState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Domain event types for hostnames
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum HostnameEvent {
    /// Local hostname was changed
    HostnameChanged(HostnameChangedEvent),
    /// Server host name was changed
    ServerHostNameChanged(ServerHostNameChangedEvent),
}

/// Event data for a local hostname change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostnameChangedEvent {
    /// Stored hostname (sanitized and truncated)
    pub hostname: String,
    /// Sign-in state captured before the change (`signed_in`, ...)
    pub account_state: String,
    /// Account type captured before the change
    pub account_type: String,
    /// Whether a SET_ACCOUNT_NAME transaction was run
    pub propagated: bool,
    /// Timestamp of the event
    pub timestamp: DateTime<Utc>,
}

/// Event data for a server host name change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerHostNameChangedEvent {
    /// New server host name
    pub name: String,
    /// Timestamp of the event
    pub timestamp: DateTime<Utc>,
}

/// Event publisher trait for publishing domain events
///
/// Publish failures are logged by the service and never fail the operation.
pub trait EventPublisher: Send + Sync {
    fn publish(&self, event: HostnameEvent) -> anyhow::Result<()>;
}

/// No-op event publisher for testing or when events are disabled
pub struct NoOpEventPublisher;

impl EventPublisher for NoOpEventPublisher {
    fn publish(&self, _event: HostnameEvent) -> anyhow::Result<()> {
        Ok(())
    }
}

impl HostnameEvent {
    /// Create a new HostnameChanged event
    pub fn hostname_changed(
        hostname: &str,
        account_state: AccountState,
        account_type: impl ToString,
        propagated: bool,
    ) -> Self {
        HostnameEvent::HostnameChanged(HostnameChangedEvent {
            hostname: hostname.to_string(),
            account_state: account_state.as_str().to_string(),
            account_type: account_type.to_string(),
            propagated,
            timestamp: Utc::now(),
        })
    }

    /// Create a new ServerHostNameChanged event
    pub fn server_host_name_changed(name: &str) -> Self {
        HostnameEvent::ServerHostNameChanged(ServerHostNameChangedEvent {
            name: name.to_string(),
            timestamp: Utc::now(),
        })
    }
}
