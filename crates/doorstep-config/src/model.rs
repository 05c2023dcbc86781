//! Configuration schema for Doorstep.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root config for the Doorstep pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DoorstepConfig {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

impl DoorstepConfig {
    /// Start building a config programmatically with defaults applied.
    pub fn builder() -> DoorstepConfigBuilder {
        DoorstepConfigBuilder::new()
    }

    /// Validate field values that serde cannot check on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.model.validate()
    }
}

/// Builder for assembling a `DoorstepConfig` in code.
#[derive(Debug, Default, Clone)]
pub struct DoorstepConfigBuilder {
    config: DoorstepConfig,
}

impl DoorstepConfigBuilder {
    /// Create a new builder seeded with default config values.
    pub fn new() -> Self {
        Self {
            config: DoorstepConfig::default(),
        }
    }

    /// Replace the model configuration.
    pub fn model(mut self, model: ModelConfig) -> Self {
        self.config.model = model;
        self
    }

    /// Replace the store configuration.
    pub fn store(mut self, store: StoreConfig) -> Self {
        self.config.store = store;
        self
    }

    /// Finalize and return the built `DoorstepConfig`.
    pub fn build(self) -> DoorstepConfig {
        self.config
    }
}

/// Model provider configuration for the report pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model identifier sent with each request.
    #[serde(default = "default_model")]
    pub model: String,
    /// Override for the provider base URL.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Sampling temperature for the topic summarization turn.
    #[serde(default = "default_topic_temperature")]
    pub topic_temperature: f32,
    /// Sampling temperature for the reframing follow-up turn.
    #[serde(default = "default_reframe_temperature")]
    pub reframe_temperature: f32,
}

impl ModelConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        for (path, value) in [
            ("model.topic_temperature", self.topic_temperature),
            ("model.reframe_temperature", self.reframe_temperature),
        ] {
            if !(0.0..=2.0).contains(&value) {
                return Err(ConfigError::InvalidField {
                    path: path.to_string(),
                    message: format!("temperature {value} is outside 0.0..=2.0"),
                });
            }
        }
        Ok(())
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: None,
            topic_temperature: default_topic_temperature(),
            reframe_temperature: default_reframe_temperature(),
        }
    }
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_topic_temperature() -> f32 {
    1.0
}

fn default_reframe_temperature() -> f32 {
    1.0
}

/// Record store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path of the SQLite database file.
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
        }
    }
}

fn default_db_path() -> PathBuf {
    PathBuf::from("doorstep.db")
}

#[cfg(test)]
mod tests {
    use super::{DoorstepConfig, ModelConfig};
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_fill_missing_fields() {
        let config: DoorstepConfig = serde_json::from_str("{}").expect("config");
        assert_eq!(config.model.model, "gpt-4o");
        assert_eq!(config.model.topic_temperature, 1.0);
        assert_eq!(config.model.reframe_temperature, 1.0);
        assert_eq!(config.model.base_url, None);
        assert_eq!(config.store.db_path.to_str(), Some("doorstep.db"));
    }

    #[test]
    fn builder_replaces_sections() {
        let config = DoorstepConfig::builder()
            .model(ModelConfig {
                model: "gpt-4o-mini".to_string(),
                ..ModelConfig::default()
            })
            .build();
        assert_eq!(config.model.model, "gpt-4o-mini");
        assert_eq!(config.store.db_path.to_str(), Some("doorstep.db"));
    }

    #[test]
    fn validate_rejects_out_of_range_temperature() {
        let config = DoorstepConfig::builder()
            .model(ModelConfig {
                topic_temperature: 3.5,
                ..ModelConfig::default()
            })
            .build();
        let err = config.validate().expect_err("must fail");
        assert!(err.to_string().contains("model.topic_temperature"));
    }

    #[test]
    fn partial_overrides_keep_other_defaults() {
        let config: DoorstepConfig =
            serde_json::from_str(r#"{"model": {"topic_temperature": 0.2}}"#).expect("config");
        assert_eq!(config.model.topic_temperature, 0.2);
        assert_eq!(config.model.model, "gpt-4o");
    }
}
