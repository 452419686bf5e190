//! Config loading, validation, and derived values.

use super::model::Config;
use super::types::{MAX_SLOTS, WEEKS_PER_BOARD};
use crate::error::{PlanError, Result};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PlanError::Io(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty map
        if yaml.trim().is_empty() {
            let config = Config::default();
            config.validate()?;
            return Ok(config);
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| PlanError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| PlanError::UserError(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values.
    ///
    /// `posts_per_week` must be positive. Large values are accepted; the
    /// board size is capped by [`Config::slot_count`].
    pub fn validate(&self) -> Result<()> {
        if self.posts_per_week == 0 {
            return Err(PlanError::UserError(
                "config validation failed: posts_per_week must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Number of posts a board built from this config holds.
    ///
    /// Four weeks of posts, capped at 30.
    pub fn slot_count(&self) -> usize {
        self.posts_per_week
            .saturating_mul(WEEKS_PER_BOARD)
            .min(MAX_SLOTS) as usize
    }
}
