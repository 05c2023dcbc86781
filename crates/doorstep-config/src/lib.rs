//! Configuration schema for Doorstep.

pub mod error;
pub mod model;

/// Config error type.
pub use error::ConfigError;
/// Config schema and builder.
pub use model::{DoorstepConfig, DoorstepConfigBuilder, ModelConfig, StoreConfig};
