//! Storage abstraction used by the HTTP handlers

use async_trait::async_trait;

use super::types::User;
use crate::error::Result;

/// Create/find operations over the users table
///
/// Implementations are shared between requests, so they must be cheap to call
/// concurrently; identifier uniqueness is the store's responsibility.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Returns every stored user
    async fn find_all(&self) -> Result<Vec<User>>;

    /// Inserts a user and returns the stored row with its generated identifier
    async fn create(&self, name: &str) -> Result<User>;
}
