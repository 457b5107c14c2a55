// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! PostgreSQL-backed user store

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::store::UserStore;
use super::types::User;
use crate::error::Result;

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS users (id BIGSERIAL PRIMARY KEY, name TEXT)";
const CREATE_NAME_INDEX: &str = "CREATE INDEX IF NOT EXISTS idx_users_name ON users (name)";
// NULL names read back as empty strings
const SELECT_ALL: &str = "SELECT id, COALESCE(name, '') AS name FROM users ORDER BY id";
const INSERT_ONE: &str = "INSERT INTO users (name) VALUES ($1) RETURNING id, name";

/// User store backed by a `sqlx` connection pool
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    /// Opens a connection pool for the given database URL
    ///
    /// # Errors
    ///
    /// Returns an error if the database is unreachable or rejects the credentials.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new().connect(database_url).await?;
        tracing::debug!("Database pool opened");
        Ok(Self { pool })
    }

    /// Wraps an existing pool
    #[must_use]
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the users table and its name index if they are missing
    ///
    /// # Errors
    ///
    /// Returns an error if either DDL statement fails.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        sqlx::query(CREATE_NAME_INDEX).execute(&self.pool).await?;
        tracing::info!("Users table schema is up to date");
        Ok(())
    }

    /// Closes every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    #[tracing::instrument(
        name = "users.select",
        skip(self),
        fields(otel.kind = "client", db.system = "postgresql", db.statement = SELECT_ALL),
        err
    )]
    async fn find_all(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;
        tracing::debug!("Fetched {} user(s)", users.len());
        Ok(users)
    }

    #[tracing::instrument(
        name = "users.insert",
        skip(self),
        fields(otel.kind = "client", db.system = "postgresql", db.statement = INSERT_ONE),
        err
    )]
    async fn create(&self, name: &str) -> Result<User> {
        let user = sqlx::query_as::<_, User>(INSERT_ONE)
            .bind(name)
            .fetch_one(&self.pool)
            .await?;
        tracing::debug!("Inserted user {}", user.id);
        Ok(user)
    }
}
