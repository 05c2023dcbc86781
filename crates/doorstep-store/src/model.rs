//! Record models persisted by the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single field note submitted with a geotag.
///
/// Created exactly once per submission, never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemoRecord {
    /// Record identifier, generated at creation.
    pub id: Uuid,
    /// Latitude of the submission, accepted as given.
    pub latitude: f64,
    /// Longitude of the submission, accepted as given.
    pub longitude: f64,
    /// Free-text note content.
    pub memo: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// One run of the summarization pipeline over all memos.
///
/// Append-only. The `input_prompt` is the exact string sent to the model so
/// a run can be audited byte-for-byte against the memos it summarized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchAnalysisRecord {
    /// Record identifier, generated at creation.
    pub id: Uuid,
    /// The exact prompt string sent to the model.
    pub input_prompt: String,
    /// The model's combined report text.
    pub output: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
