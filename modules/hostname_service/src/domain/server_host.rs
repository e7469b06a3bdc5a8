//! Server host name - the name a hosted game advertises to clients

use super::ports::DeviceInfo;
use crate::contract::HostnameError;
use parking_lot::RwLock;
use std::sync::Arc;

pub struct ServerHost {
    device: Arc<dyn DeviceInfo>,
    server_name: String,
    /// Empty until first read or write
    host_name: RwLock<String>,
}

impl ServerHost {
    pub fn new(device: Arc<dyn DeviceInfo>, server_name: impl Into<String>) -> Self {
        Self {
            device,
            server_name: server_name.into(),
            host_name: RwLock::new(String::new()),
        }
    }

    /// Current host name, initialised to the default on first use
    pub fn host_name(&self) -> String {
        {
            let current = self.host_name.read();
            if !current.is_empty() {
                return current.clone();
            }
        }

        let mut current = self.host_name.write();
        if current.is_empty() {
            *current = self.default_host_name();
            tracing::debug!(host_name = %current, "Server host name defaulted");
        }
        current.clone()
    }

    /// Replace the host name; empty names are rejected, others stored as given
    pub fn set_host_name(&self, name: &str) -> Result<(), HostnameError> {
        if name.is_empty() {
            return Err(HostnameError::invalid_argument(
                "Server host name cannot be empty",
            ));
        }
        *self.host_name.write() = name.to_string();
        Ok(())
    }

    /// `"<server name> (<device name>)"`, or just the server name without a device name
    pub fn default_host_name(&self) -> String {
        let device_name = self.device.device_name();
        if device_name.is_empty() {
            self.server_name.clone()
        } else {
            format!("{} ({})", self.server_name, device_name)
        }
    }
}
