//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<str>` is a reference-counted pointer
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Secret used to verify the HS256 signature of bearer tokens.
    pub jwt_secret: Arc<str>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `jwt_secret` - Secret bearer tokens are signed with
    pub fn new(db: DatabaseConnection, jwt_secret: impl Into<Arc<str>>) -> Self {
        Self {
            db,
            jwt_secret: jwt_secret.into(),
        }
    }
}
