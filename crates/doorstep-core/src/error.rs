//! Error types for the report pipeline.

use doorstep_llm::LlmError;
use doorstep_store::StoreError;
use thiserror::Error;

/// Errors returned by pipeline operations.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Record store failure, propagated unmodified.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
    /// Model client failure, including a missing credential.
    #[error("model error: {0}")]
    Model(#[from] LlmError),
    /// No batch analysis has been recorded yet.
    #[error("no report has been generated yet")]
    NoReport,
}
