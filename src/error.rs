// boundary errors. the matching engine itself never fails.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to decode TOON dataset: {0}")]
    Toon(String),

    #[error("failed to encode dataset as TOON: {0}")]
    Encode(String),

    #[error("invalid JSON dataset: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to decode TOON config: {0}")]
    Toon(String),

    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("supply_low_max ({low_max}) must not exceed supply_medium_max ({medium_max})")]
    InvalidThresholds { low_max: usize, medium_max: usize },
}
