//! Module declaration and lifecycle implementation

use crate::config::Config;
use crate::domain::ports::{AccountSubsystem, ConfigStore};
use crate::domain::{EventPublisher, NoOpEventPublisher, Service, Utf8TextSanitizer};
use crate::infra::device::SystemDeviceInfo;
use crate::infra::store::{JsonFileConfigStore, MemoryConfigStore};
use anyhow::Result;
use parking_lot::RwLock;
use std::sync::Arc;

/// Hostname service module
pub struct HostnameServiceModule {
    config: RwLock<Config>,
    service: RwLock<Option<Arc<Service>>>,
}

impl Default for HostnameServiceModule {
    fn default() -> Self {
        Self {
            config: RwLock::new(Config::default()),
            service: RwLock::new(None),
        }
    }
}

impl HostnameServiceModule {
    /// Build the domain service from typed configuration
    ///
    /// `account` may be `None` when the engine has not initialized its account
    /// subsystem yet; attach it later through [`Service::attach_account`].
    pub fn init(
        &self,
        cfg: Config,
        account: Option<Arc<dyn AccountSubsystem>>,
        event_publisher: Option<Arc<dyn EventPublisher>>,
    ) -> Result<()> {
        // Build config store
        let config_store: Arc<dyn ConfigStore> = match &cfg.store_path {
            Some(path) => Arc::new(JsonFileConfigStore::open(path)?),
            None => Arc::new(MemoryConfigStore::new()),
        };

        let device = Arc::new(SystemDeviceInfo::new(cfg.device_name.clone()));

        let event_publisher = match event_publisher {
            Some(publisher) if cfg.enable_events => publisher,
            _ => Arc::new(NoOpEventPublisher) as Arc<dyn EventPublisher>,
        };

        // Build domain service
        let service = Service::new(
            config_store,
            account,
            Arc::new(Utf8TextSanitizer),
            device,
            event_publisher,
        )
        .with_server_name(cfg.server_name.clone());

        tracing::info!(
            store = ?cfg.store_path,
            server_name = %cfg.server_name,
            "Hostname service initialized"
        );

        *self.config.write() = cfg;
        *self.service.write() = Some(Arc::new(service));
        Ok(())
    }

    /// Domain service, once initialized
    pub fn service(&self) -> Result<Arc<Service>> {
        self.service
            .read()
            .as_ref()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Service not initialized"))
    }

    /// Native client for in-process callers
    pub fn client(&self) -> Result<Arc<dyn crate::contract::HostnameApi>> {
        let client = crate::api::native::NativeClient::new(self.service()?);
        Ok(Arc::new(client))
    }

    /// Configuration the module was initialized with
    pub fn config(&self) -> Config {
        self.config.read().clone()
    }

    /// Register REST routes on `router`
    pub fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        let service = self.service()?;

        tracing::info!("Registering hostname service REST routes");
        crate::api::rest::routes::register_routes(router, service)
    }
}
