// thresholds for the derived views (outlook, supply bands)
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Knobs for the views built on top of the engine. The gap and readiness
/// functions themselves take no configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// A not-ready position at most this many skills short is "within reach".
    pub near_ready_max_gaps: usize,
    /// Total supply up to this is `low` (0 is always `critical`).
    pub supply_low_max: usize,
    /// Total supply up to this is `medium`, above it `high`.
    pub supply_medium_max: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            near_ready_max_gaps: 3,
            supply_low_max: 2,
            supply_medium_max: 5,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.supply_low_max > self.supply_medium_max {
            return Err(ConfigError::InvalidThresholds {
                low_max: self.supply_low_max,
                medium_max: self.supply_medium_max,
            });
        }
        Ok(())
    }

    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toon(input: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value =
            toon_format::decode_default(input).map_err(|e| ConfigError::Toon(e.to_string()))?;
        let config: EngineConfig = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }
}
