//! Application state shared across HTTP handlers

use std::sync::Arc;

use crate::db::UserStore;

/// Shared application state
///
/// Built once in the entry point and handed to [`super::create_router`].
pub struct AppState {
    pub users: Arc<dyn UserStore>,
}

impl AppState {
    #[must_use]
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }
}
