// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use axum::{Json, extract::State};
use std::sync::Arc;
use tracing::Instrument;

use crate::api::AppState;
use crate::db::{DEFAULT_USER_NAME, User};
use crate::error::Result;

/// GET /users
///
/// Returns every stored user as a JSON array (empty array for an empty table).
pub async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<User>>> {
    let users = state
        .users
        .find_all()
        .instrument(tracing::info_span!("Fetch Users"))
        .await?;

    Ok(Json(users))
}

/// POST /users
///
/// Inserts a user with the fixed default name and returns the stored row.
pub async fn create_user(State(state): State<Arc<AppState>>) -> Result<Json<User>> {
    let user = state
        .users
        .create(DEFAULT_USER_NAME)
        .instrument(tracing::info_span!("Create User"))
        .await?;

    tracing::info!("Created user {}", user.id);
    Ok(Json(user))
}
