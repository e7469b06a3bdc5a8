//! Configuration for hostname service module

use crate::contract::DEFAULT_SERVER_NAME;
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix for overrides (e.g. `HOSTNAME_SERVICE_SERVER_NAME`)
pub const ENV_PREFIX: &str = "HOSTNAME_SERVICE_";

/// Hostname service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// JSON file backing the config mapping; in-memory when unset
    #[serde(default)]
    pub store_path: Option<PathBuf>,

    /// Base name for the default server host name
    #[serde(default = "default_server_name")]
    pub server_name: String,

    /// Use this instead of the OS host name as the device name
    #[serde(default)]
    pub device_name: Option<String>,

    /// Publish hostname events
    #[serde(default = "default_true")]
    pub enable_events: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: None,
            server_name: default_server_name(),
            device_name: None,
            enable_events: true,
        }
    }
}

impl Config {
    /// Layer defaults, an optional YAML file and `HOSTNAME_SERVICE_*` env vars
    pub fn load(yaml_path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = yaml_path {
            figment = figment.merge(Yaml::file(path));
        }
        let config = figment.merge(Env::prefixed(ENV_PREFIX)).extract()?;
        Ok(config)
    }
}

fn default_server_name() -> String {
    DEFAULT_SERVER_NAME.to_string()
}

fn default_true() -> bool {
    true
}
