//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ===== Local Hostname DTOs =====

/// Current local hostname
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HostnameDto {
    /// Resolved hostname (account name when signed in)
    #[schema(example = "Friday Night Brawl")]
    pub hostname: String,
}

/// Local hostname update request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateHostnameRequest {
    /// New hostname; trimmed, sanitized and cut to 50 characters
    pub hostname: String,
}

// ===== Server Host DTOs =====

/// Server host name state
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServerHostDto {
    /// Current server host name
    #[schema(example = "BombSquad Server (den-pc)")]
    pub name: String,

    /// Name used when none has been set
    pub default_name: String,
}

/// Server host name update request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateServerHostRequest {
    /// New server host name
    pub name: String,
}
