//! Contract layer - public API for inter-module communication
//!
//! This layer contains transport-agnostic models and the native client trait.
//! NO serde derives on models - these are pure domain types.

pub mod client;
pub mod error;
pub mod model;

pub use client::HostnameApi;
pub use error::HostnameError;
pub use model::{
    AccountState, AccountTransaction, AccountType, DEFAULT_SERVER_NAME, LOCAL_HOSTNAME_KEY,
    MAX_HOSTNAME_CHARS, UNKNOWN_HOSTNAME,
};
