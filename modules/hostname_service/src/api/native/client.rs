//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{HostnameApi, HostnameError};
use crate::domain::Service;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
///
/// This client is used for in-process communication without HTTP overhead.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

impl HostnameApi for NativeClient {
    fn set_local_hostname(&self, new_hostname: &str) -> Result<(), HostnameError> {
        self.service.set_local_hostname(new_hostname)
    }

    fn current_hostname(&self) -> String {
        self.service.current_hostname()
    }

    fn server_host_name(&self) -> String {
        self.service.server_host_name()
    }

    fn set_server_host_name(&self, name: &str) -> Result<(), HostnameError> {
        self.service.set_server_host_name(name)
    }

    fn default_server_host_name(&self) -> String {
        self.service.default_server_host_name()
    }
}
