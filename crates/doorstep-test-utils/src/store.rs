//! Record store doubles.

use async_trait::async_trait;
use doorstep_store::{BatchAnalysisRecord, MemoRecord, RecordStore, StoreError};

/// Record store that fails every operation, for exercising storage error
/// propagation.
#[derive(Debug, Clone, Default)]
pub struct FailingRecordStore;

impl FailingRecordStore {
    fn error() -> StoreError {
        StoreError::Sqlite(rusqlite::Error::InvalidQuery)
    }
}

#[async_trait]
impl RecordStore for FailingRecordStore {
    async fn insert_memos(&self, _records: &[MemoRecord]) -> Result<(), StoreError> {
        Err(Self::error())
    }

    async fn insert_analysis(&self, _record: &BatchAnalysisRecord) -> Result<(), StoreError> {
        Err(Self::error())
    }

    async fn list_memos(&self) -> Result<Vec<MemoRecord>, StoreError> {
        Err(Self::error())
    }

    async fn list_memo_texts(&self) -> Result<Vec<String>, StoreError> {
        Err(Self::error())
    }

    async fn latest_analysis(&self) -> Result<Option<BatchAnalysisRecord>, StoreError> {
        Err(Self::error())
    }
}
