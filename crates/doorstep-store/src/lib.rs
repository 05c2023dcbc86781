//! Durable record storage for Doorstep.

pub mod error;
pub mod model;
pub mod store;

/// Store error type.
pub use error::StoreError;
/// Memo and batch analysis record models.
pub use model::{BatchAnalysisRecord, MemoRecord};
/// Record store interface and default SQLite implementation.
pub use store::{RecordStore, SqliteRecordStore};
