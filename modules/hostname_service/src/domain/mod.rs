//! Domain layer - business logic and services

pub mod events;
pub mod ports;
pub mod server_host;
pub mod service;
pub mod validation;

pub use events::{EventPublisher, HostnameEvent, NoOpEventPublisher};
pub use ports::{AccountSubsystem, ConfigStore, DeviceInfo, TextSanitizer};
pub use server_host::ServerHost;
pub use service::Service;
pub use validation::Utf8TextSanitizer;
