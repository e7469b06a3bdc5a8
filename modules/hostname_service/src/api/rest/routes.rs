//! Route registration

use super::{dto::*, handlers};
use crate::domain::Service;
use axum::{routing::get, Extension, Router};
use std::sync::Arc;

/// Register all REST routes
pub fn register_routes(router: Router, service: Arc<Service>) -> anyhow::Result<Router> {
    let router = router
        // Local hostname endpoints
        .route(
            "/hostname",
            get(get_hostname_handler).put(update_hostname_handler),
        )
        // Server host endpoints
        .route(
            "/server-host",
            get(get_server_host_handler).put(update_server_host_handler),
        )
        // Add service as extension for handlers
        .layer(Extension(service));

    Ok(router)
}

// ===== Handler wrappers that extract service from Extension =====

async fn get_hostname_handler(
    Extension(service): Extension<Arc<Service>>,
) -> axum::Json<HostnameDto> {
    handlers::get_hostname(service).await
}

async fn update_hostname_handler(
    Extension(service): Extension<Arc<Service>>,
    json: axum::Json<UpdateHostnameRequest>,
) -> Result<axum::Json<HostnameDto>, super::error::Problem> {
    handlers::update_hostname(service, json).await
}

async fn get_server_host_handler(
    Extension(service): Extension<Arc<Service>>,
) -> axum::Json<ServerHostDto> {
    handlers::get_server_host(service).await
}

async fn update_server_host_handler(
    Extension(service): Extension<Arc<Service>>,
    json: axum::Json<UpdateServerHostRequest>,
) -> Result<axum::Json<ServerHostDto>, super::error::Problem> {
    handlers::update_server_host(service, json).await
}
