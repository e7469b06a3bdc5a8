//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    dto::*,
    error::{map_domain_error, Problem},
};
use crate::domain::Service;
use axum::Json;
use std::sync::Arc;

// ===== Local Hostname Handlers =====

/// Get the current local hostname
pub async fn get_hostname(service: Arc<Service>) -> Json<HostnameDto> {
    Json(HostnameDto {
        hostname: service.current_hostname(),
    })
}

/// Change the local hostname
pub async fn update_hostname(
    service: Arc<Service>,
    Json(req): Json<UpdateHostnameRequest>,
) -> Result<Json<HostnameDto>, Problem> {
    service
        .set_local_hostname(&req.hostname)
        .map_err(map_domain_error)?;

    Ok(Json(HostnameDto {
        hostname: service.current_hostname(),
    }))
}

// ===== Server Host Handlers =====

/// Get the server host name and its default
pub async fn get_server_host(service: Arc<Service>) -> Json<ServerHostDto> {
    Json(server_host_dto(&service))
}

/// Change the server host name
pub async fn update_server_host(
    service: Arc<Service>,
    Json(req): Json<UpdateServerHostRequest>,
) -> Result<Json<ServerHostDto>, Problem> {
    service
        .set_server_host_name(&req.name)
        .map_err(map_domain_error)?;

    Ok(Json(server_host_dto(&service)))
}

fn server_host_dto(service: &Service) -> ServerHostDto {
    ServerHostDto {
        name: service.server_host_name(),
        default_name: service.default_server_host_name(),
    }
}
