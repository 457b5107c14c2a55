//! HTTP API module for the user service
//!
//! # Endpoints
//! - `GET /users` — list all users
//! - `POST /users` — create a user named "John Doe"
//!
//! Every request runs inside a tracing span parented to the caller's trace
//! context, and a panic in a handler is turned into a 500 response.

pub mod handlers;
mod state;

use std::any::Any;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Request,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{Level, Span};
use tracing_opentelemetry::OpenTelemetrySpanExt;

use crate::error::ErrorResponse;
use crate::telemetry;

pub use state::AppState;

/// Creates the main Axum router with all endpoints and middleware
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/users",
            get(handlers::list_users).post(handlers::create_user),
        )
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(make_request_span)
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

fn make_request_span(request: &Request) -> Span {
    let span = tracing::info_span!(
        "request",
        otel.kind = "server",
        otel.name = %format!("{} {}", request.method(), request.uri().path()),
        method = %request.method(),
        uri = %request.uri(),
    );
    if let Err(e) = span.set_parent(telemetry::parent_context(request.headers())) {
        tracing::debug!("Failed to attach remote trace context: {:?}", e);
    }
    span
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!("Handler panicked: {}", detail);

    let body = ErrorResponse {
        message: "Internal Server Error".to_string(),
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
