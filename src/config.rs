//! Store and runtime configuration.

use serde::{Deserialize, Serialize};

/// Record counts at which the advisory warning is armed.
pub const DEFAULT_WARNING_THRESHOLDS: [usize; 2] = [10, 20];

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON could not be decoded.
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    /// A warning threshold of zero can never be crossed by an insert.
    #[error("warning threshold must be at least 1")]
    ZeroThreshold,
}

/// Behavior knobs for [`crate::core::store::DrinkListStore`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Collection sizes that arm the warning the moment an add reaches them.
    pub warning_thresholds: Vec<usize>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            warning_thresholds: DEFAULT_WARNING_THRESHOLDS.to_vec(),
        }
    }
}

impl StoreConfig {
    /// Decodes a config from JSON, filling omitted fields with defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.normalized()
    }

    /// Sorts and deduplicates thresholds; rejects zero.
    pub fn normalized(mut self) -> Result<Self, ConfigError> {
        if self.warning_thresholds.contains(&0) {
            return Err(ConfigError::ZeroThreshold);
        }
        self.warning_thresholds.sort_unstable();
        self.warning_thresholds.dedup();
        Ok(self)
    }

    /// True when a collection that just grew to `len` crosses a threshold.
    ///
    /// Does not rely on the list being normalized.
    pub fn is_threshold(&self, len: usize) -> bool {
        self.warning_thresholds.contains(&len)
    }
}

/// Channel sizing for the single-writer runtime.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Pending command capacity.
    pub command_queue_bound: usize,
    /// Event broadcast capacity per subscriber.
    pub event_queue_bound: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            command_queue_bound: 256,
            event_queue_bound: 1024,
        }
    }
}
