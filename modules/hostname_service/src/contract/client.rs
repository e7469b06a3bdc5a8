//! Native client trait for inter-module communication
//!
//! This trait defines the API that other modules use to interact with hostname service.
//! NO HTTP - direct function calls.

use super::error::HostnameError;

/// Hostname service API for inter-module communication
pub trait HostnameApi: Send + Sync {
    // ===== Local Hostname =====

    /// Validate, store and propagate a new local hostname
    fn set_local_hostname(&self, new_hostname: &str) -> Result<(), HostnameError>;

    /// Resolve the hostname currently shown to the player
    fn current_hostname(&self) -> String;

    // ===== Server Host Name =====

    /// Get the name advertised by a hosted server
    fn server_host_name(&self) -> String;

    /// Set the name advertised by a hosted server
    fn set_server_host_name(&self, name: &str) -> Result<(), HostnameError>;

    /// Get the default server host name derived from the device name
    fn default_server_host_name(&self) -> String;
}
