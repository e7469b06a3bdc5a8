//! Infrastructure layer - concrete engine collaborators

pub mod account;
pub mod device;
pub mod store;
