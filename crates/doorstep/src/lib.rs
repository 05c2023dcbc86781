//! Public surface for Doorstep.
//!
//! Re-exports the workspace crates under short names and provides a small
//! logging helper so embedding processes wire up output the same way.

/// Re-export for convenience.
pub use doorstep_config as config;
pub use doorstep_core as core;
/// Re-export for convenience.
pub use doorstep_llm as llm;
/// Re-export for convenience.
pub use doorstep_store as store;

#[inline]
/// Initialize logging via env_logger when the "logging" feature is enabled.
///
/// A no-op otherwise. The embedding process should call this once, early in
/// startup, before any pipeline operation runs.
pub fn init_logging() {
    #[cfg(feature = "logging")]
    {
        let _ = env_logger::try_init();
    }
}
