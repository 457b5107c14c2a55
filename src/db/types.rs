// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Type definitions for stored records

use serde::{Deserialize, Serialize};

/// Name given to every user created through `POST /users`
pub const DEFAULT_USER_NAME: &str = "John Doe";

/// A row of the `users` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    #[sqlx(try_from = "i64")]
    pub id: u64,
    pub name: String,
}
