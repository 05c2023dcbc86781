//! Error types for record store operations.

/// Errors returned by record stores.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Underlying SQLite error.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    /// A stored record id could not be parsed.
    #[error("invalid record id: {0}")]
    InvalidId(#[from] uuid::Error),
}
