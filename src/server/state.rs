//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds the database connection pool,
//! the token signing keys and the id of the privileged user.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::util::token::TokenKeys;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a pool handle and the
/// token keys sit behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HS256 keys used to issue and validate bearer tokens.
    pub tokens: Arc<TokenKeys>,

    /// User id allowed to suspend and reactivate other users.
    pub admin_user_id: i32,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Signing and validation keys for bearer tokens
    /// - `admin_user_id` - Privileged user id for the suspend endpoint
    pub fn new(db: DatabaseConnection, tokens: TokenKeys, admin_user_id: i32) -> Self {
        Self {
            db,
            tokens: Arc::new(tokens),
            admin_user_id,
        }
    }
}
