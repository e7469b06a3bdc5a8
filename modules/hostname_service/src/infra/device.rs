//! Device identity from the operating system

use crate::domain::ports::DeviceInfo;

/// Device name taken from the OS host name, unless overridden
#[derive(Debug, Clone, Default)]
pub struct SystemDeviceInfo {
    name_override: Option<String>,
}

impl SystemDeviceInfo {
    pub fn new(name_override: Option<String>) -> Self {
        Self {
            name_override: name_override.filter(|n| !n.trim().is_empty()),
        }
    }
}

impl DeviceInfo for SystemDeviceInfo {
    fn device_name(&self) -> String {
        if let Some(name) = &self.name_override {
            return name.clone();
        }

        match hostname::get() {
            Ok(name) => name.to_string_lossy().into_owned(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read OS host name");
                String::new()
            }
        }
    }
}
