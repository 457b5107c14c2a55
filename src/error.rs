//! Error types for the user service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network or IO error
    #[error("IO error")]
    Io(#[from] std::io::Error),

    /// Address parsing error
    #[error("Address parse error")]
    AddrParse(#[from] std::net::AddrParseError),

    /// Database connection, migration or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Trace exporter or subscriber initialization error
    #[error("Telemetry error: {0}")]
    Telemetry(String),
}

impl From<opentelemetry_otlp::ExporterBuildError> for AppError {
    fn from(error: opentelemetry_otlp::ExporterBuildError) -> Self {
        Self::Telemetry(error.to_string())
    }
}

impl From<tracing_subscriber::util::TryInitError> for AppError {
    fn from(error: tracing_subscriber::util::TryInitError) -> Self {
        Self::Telemetry(error.to_string())
    }
}

/// Body returned for any failed request
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {}", self);
        let body = ErrorResponse {
            message: "Internal Server Error".to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// Convenient alias for Result with application error
pub type Result<T> = std::result::Result<T, AppError>;
