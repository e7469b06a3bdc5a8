//! Hostname Service Module
//!
//! Manages the local hostname shown to players and the name a hosted server
//! advertises. Config storage, account state and device identity belong to
//! the host engine and are injected as collaborators.

// Public exports
pub mod contract;
pub use contract::{
    client::HostnameApi, error::HostnameError, AccountState, AccountTransaction, AccountType,
};

pub mod module;
pub use module::HostnameServiceModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
