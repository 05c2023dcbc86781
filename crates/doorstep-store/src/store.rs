//! Record store interface and default SQLite implementation.

use crate::error::StoreError;
use crate::model::{BatchAnalysisRecord, MemoRecord};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, info};
use parking_lot::Mutex;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;
use uuid::Uuid;

#[async_trait]
/// Record store abstraction used by the ingestion entry point and the
/// report pipeline.
///
/// The interface is deliberately narrow: typed inserts and the handful of
/// reads the pipeline needs, all parameterized internally. Callers never
/// supply SQL.
pub trait RecordStore: Send + Sync {
    /// Insert a batch of memo records. All-or-nothing per call: either the
    /// whole batch persists or none of it does.
    async fn insert_memos(&self, records: &[MemoRecord]) -> Result<(), StoreError>;

    /// Insert one batch analysis record.
    async fn insert_analysis(&self, record: &BatchAnalysisRecord) -> Result<(), StoreError>;

    /// List all memo records, oldest first.
    async fn list_memos(&self) -> Result<Vec<MemoRecord>, StoreError>;

    /// List all memo texts, oldest first.
    async fn list_memo_texts(&self) -> Result<Vec<String>, StoreError>;

    /// Fetch the most recent batch analysis record, if any.
    ///
    /// "Most recent" means creation timestamp descending, ties broken by id
    /// descending — multiple records can share a timestamp at typical clock
    /// resolution.
    async fn latest_analysis(&self) -> Result<Option<BatchAnalysisRecord>, StoreError>;
}

/// SQLite-backed record store.
///
/// The connection sits behind a mutex; SQLite serializes conflicting writes
/// and batch inserts run inside a transaction.
pub struct SqliteRecordStore {
    conn: Mutex<Connection>,
}

impl SqliteRecordStore {
    /// Open a store at the given path, creating the schema if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(path.as_ref())?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.init_schema()?;
        info!(
            "opened sqlite record store (path={})",
            path.as_ref().display()
        );
        Ok(store)
    }

    /// Open an in-memory store. Useful for tests and ephemeral runs.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<(), StoreError> {
        self.conn.lock().execute_batch(
            "CREATE TABLE IF NOT EXISTS memo (
                id          TEXT PRIMARY KEY,
                latitude    REAL NOT NULL,
                longitude   REAL NOT NULL,
                memo        TEXT NOT NULL,
                created_at  TEXT NOT NULL
            );
            CREATE TABLE IF NOT EXISTS batch_analysis (
                id            TEXT PRIMARY KEY,
                input_prompt  TEXT NOT NULL,
                output        TEXT NOT NULL,
                created_at    TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_memo_created_at ON memo(created_at);
            CREATE INDEX IF NOT EXISTS idx_batch_analysis_created_at
                ON batch_analysis(created_at);",
        )?;
        Ok(())
    }
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    /// Insert memo records inside a single transaction.
    async fn insert_memos(&self, records: &[MemoRecord]) -> Result<(), StoreError> {
        let mut conn = self.conn.lock();
        let tx = conn.transaction()?;
        for record in records {
            tx.execute(
                "INSERT INTO memo (id, latitude, longitude, memo, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    record.id.to_string(),
                    record.latitude,
                    record.longitude,
                    record.memo,
                    record.created_at,
                ],
            )?;
        }
        tx.commit()?;
        debug!("stored memo records (count={})", records.len());
        Ok(())
    }

    async fn insert_analysis(&self, record: &BatchAnalysisRecord) -> Result<(), StoreError> {
        self.conn.lock().execute(
            "INSERT INTO batch_analysis (id, input_prompt, output, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                record.id.to_string(),
                record.input_prompt,
                record.output,
                record.created_at,
            ],
        )?;
        debug!(
            "stored batch analysis (id={}, output_len={})",
            record.id,
            record.output.len()
        );
        Ok(())
    }

    async fn list_memos(&self) -> Result<Vec<MemoRecord>, StoreError> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(
            "SELECT id, latitude, longitude, memo, created_at
             FROM memo ORDER BY created_at ASC, id ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, f64>(1)?,
                row.get::<_, f64>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, DateTime<Utc>>(4)?,
            ))
        })?;
        let mut records = Vec::new();
        for row in rows {
            let (id, latitude, longitude, memo, created_at) = row?;
            records.push(MemoRecord {
                id: Uuid::parse_str(&id)?,
                latitude,
                longitude,
                memo,
                created_at,
            });
        }
        Ok(records)
    }

    async fn list_memo_texts(&self) -> Result<Vec<String>, StoreError> {
        let conn = self.conn.lock();
        let mut stmt =
            conn.prepare("SELECT memo FROM memo ORDER BY created_at ASC, id ASC")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        let mut texts = Vec::new();
        for row in rows {
            texts.push(row?);
        }
        Ok(texts)
    }

    async fn latest_analysis(&self) -> Result<Option<BatchAnalysisRecord>, StoreError> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(
            "SELECT id, input_prompt, output, created_at
             FROM batch_analysis ORDER BY created_at DESC, id DESC LIMIT 1",
        )?;
        let row = stmt
            .query_row([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, DateTime<Utc>>(3)?,
                ))
            })
            .optional()?;
        let Some((id, input_prompt, output, created_at)) = row else {
            return Ok(None);
        };
        Ok(Some(BatchAnalysisRecord {
            id: Uuid::parse_str(&id)?,
            input_prompt,
            output,
            created_at,
        }))
    }
}
