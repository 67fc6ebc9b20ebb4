use thiserror::Error;

/// Errors raised while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to connect to the in-memory database or create a table.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// The context has no open connection.
    #[error("test database is not connected")]
    NotConnected,
}
