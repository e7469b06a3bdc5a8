//! Contract error types for hostname service
//!
//! These errors are transport-agnostic and used for inter-module communication.

/// Hostname service domain errors
#[derive(Debug, thiserror::Error)]
pub enum HostnameError {
    /// Input rejected before any store was touched
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Why the input was rejected
        message: String,
    },

    /// A required collaborator has not been initialized
    #[error("{capability} subsystem not available")]
    Unavailable {
        /// Name of the missing capability
        capability: String,
    },

    /// The secondary account transaction failed after the config was committed
    #[error("Account name propagation failed: {0}")]
    Propagation(#[source] anyhow::Error),

    /// The config store could not be committed
    #[error("Config commit failed: {0}")]
    Storage(#[source] anyhow::Error),
}

impl HostnameError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn unavailable(capability: impl Into<String>) -> Self {
        Self::Unavailable {
            capability: capability.into(),
        }
    }
}
