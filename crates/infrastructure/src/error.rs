use thiserror::Error;

/// Errors that can occur while opening or preparing the database.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The connection options were invalid or the pool could not connect.
    #[error("Database error: {0}")]
    Connection(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Result type for database setup operations.
pub type Result<T> = std::result::Result<T, DatabaseError>;
