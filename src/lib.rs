// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! # User Service
//!
//! Minimal HTTP service over a PostgreSQL `users` table, instrumented with
//! OpenTelemetry distributed tracing.
//!
//! ## Main modules
//! - `api`: HTTP router, handlers and middleware
//! - `config`: configuration management
//! - `db`: user store and schema setup
//! - `error`: error types
//! - `telemetry`: logging and trace export
//! - `prelude`: commonly used types and traits

mod api;
mod config;
mod db;
mod error;
pub mod prelude;
pub mod telemetry;

// Re-export commonly used types
/// Application configuration
pub use config::Config;

/// Application error and result type
pub use error::{AppError, ErrorResponse, Result};

/// HTTP API router and state
pub use api::{AppState, create_router};

/// User store and record types
pub use db::{DEFAULT_USER_NAME, PgUserStore, User, UserStore};
