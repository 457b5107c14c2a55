//! Persistence module for the users table
//!
//! Handlers only see the [`UserStore`] trait; the PostgreSQL implementation
//! owns the connection pool and the table schema.

mod postgres;
mod store;
mod types;

pub use postgres::PgUserStore;
pub use store::UserStore;
pub use types::{DEFAULT_USER_NAME, User};
