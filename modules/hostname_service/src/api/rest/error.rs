//! HTTP error mapping to RFC-9457 Problem Details

use crate::contract::HostnameError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// RFC-9457 Problem Details for HTTP API errors
#[derive(Debug, Serialize)]
pub struct Problem {
    /// A URI reference that identifies the problem type
    #[serde(rename = "type")]
    pub type_uri: String,

    /// A short, human-readable summary of the problem type
    pub title: String,

    /// The HTTP status code
    pub status: u16,

    /// A human-readable explanation specific to this occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Problem {
    /// Create a new Problem Details response
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            type_uri: format!("https://httpstatuses.io/{}", status.as_u16()),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
        }
    }

    /// Add detail message
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Map domain errors to HTTP Problem Details
pub fn map_domain_error(error: HostnameError) -> Problem {
    match error {
        HostnameError::InvalidArgument { message } => {
            Problem::new(StatusCode::BAD_REQUEST, "Invalid Argument").with_detail(message)
        }

        HostnameError::Unavailable { capability } => {
            Problem::new(StatusCode::SERVICE_UNAVAILABLE, "Subsystem Unavailable")
                .with_detail(format!("{} subsystem is not initialized", capability))
        }

        HostnameError::Propagation(e) => {
            tracing::error!("Account propagation error: {:?}", e);
            Problem::new(StatusCode::BAD_GATEWAY, "Account Propagation Failed")
                .with_detail("Hostname was stored but the account name could not be updated")
        }

        HostnameError::Storage(e) => {
            tracing::error!("Config storage error: {:?}", e);
            Problem::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
                .with_detail("Hostname could not be saved")
        }
    }
}
