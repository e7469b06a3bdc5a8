//! Contract models for hostname service
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

use std::fmt;

/// Config key holding the local hostname
pub const LOCAL_HOSTNAME_KEY: &str = "LocalHostName";

/// Hard cap on the stored hostname, in characters
pub const MAX_HOSTNAME_CHARS: usize = 50;

/// Returned by reads when no account subsystem is attached
pub const UNKNOWN_HOSTNAME: &str = "Unknown";

/// Base name advertised by a hosted server when nothing else is configured
pub const DEFAULT_SERVER_NAME: &str = "BombSquad Server";

/// Sign-in state reported by the account subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountState {
    SignedOut,
    SigningIn,
    SignedIn,
}

impl AccountState {
    /// Wire representation used by the host engine
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SignedOut => "signed_out",
            Self::SigningIn => "signing_in",
            Self::SignedIn => "signed_in",
        }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, Self::SignedIn)
    }
}

impl fmt::Display for AccountState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of account currently known to the account subsystem
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountType {
    /// Local (offline) account named after the hostname
    Local,
    /// Account bound to the device identity
    Device,
    /// Dedicated server account
    Server,
    /// Any other provider, kept verbatim
    Other(String),
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("Local"),
            Self::Device => f.write_str("Device"),
            Self::Server => f.write_str("Server"),
            Self::Other(name) => f.write_str(name),
        }
    }
}

/// Transaction submitted to the account subsystem
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountTransaction {
    /// Rename the signed-in account
    SetAccountName { name: String },
}

impl AccountTransaction {
    /// Transaction kind as understood by the account backend
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SetAccountName { .. } => "SET_ACCOUNT_NAME",
        }
    }

    /// JSON payload sent to the account backend
    pub fn payload(&self) -> serde_json::Value {
        match self {
            Self::SetAccountName { name } => serde_json::json!({
                "type": self.kind(),
                "name": name,
            }),
        }
    }
}
