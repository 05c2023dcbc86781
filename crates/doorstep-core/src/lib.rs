//! Core report pipeline for Doorstep.
//!
//! This crate owns memo ingestion, prompt assembly, and the batch analysis
//! pipeline that a thin HTTP layer wraps.

pub mod error;
pub mod ingest;
pub mod pipeline;
pub mod prompt;

/// Pipeline error type.
pub use error::ReportError;
/// Memo record construction.
pub use ingest::new_memo;
/// Report pipeline facade and the fixed report section separator.
pub use pipeline::{REPORT_SECTION_SEPARATOR, ReportPipeline};
/// Deterministic prompt assembly.
pub use prompt::assemble_prompt;
