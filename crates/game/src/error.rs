//! Configuration error types.

use thiserror::Error;

/// Errors raised while loading or validating a [`Config`](crate::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid arena size: {width}x{height}")]
    InvalidArena { width: f64, height: f64 },

    #[error("{entity} size {size} does not fit in a {width}x{height} arena")]
    EntityTooLarge {
        entity: &'static str,
        size: f64,
        width: f64,
        height: f64,
    },

    #[error("Invalid {entity} size range: {min}..{max}")]
    InvalidSizeRange {
        entity: &'static str,
        min: f64,
        max: f64,
    },

    #[error("Invalid value for {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to write config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
