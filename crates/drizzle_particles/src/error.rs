//! # Configuration Error Types
//!
//! Everything that can be wrong with an emitter description. Once an emitter
//! is built, its per-frame operations cannot fail.

use thiserror::Error;

/// Errors found while reading or validating emitter configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A pool must hold at least one particle.
    #[error("emitter `{emitter}`: capacity must be greater than zero")]
    ZeroCapacity {
        /// Emitter name.
        emitter: String,
    },

    /// A scalar parameter is negative, NaN or infinite.
    #[error("emitter `{emitter}`: `{field}` must be finite and non-negative, got {value}")]
    InvalidScalar {
        /// Emitter name.
        emitter: String,
        /// Offending field.
        field: &'static str,
        /// The value that was rejected.
        value: f32,
    },

    /// A vector parameter has a NaN or infinite component.
    #[error("emitter `{emitter}`: `{field}` must have finite components")]
    NonFiniteVector {
        /// Emitter name.
        emitter: String,
        /// Offending field.
        field: &'static str,
    },

    /// A `min`/`max` band is inverted.
    #[error("emitter `{emitter}`: `{field}` band is inverted (min {min} > max {max})")]
    InvertedBand {
        /// Emitter name.
        emitter: String,
        /// Offending field.
        field: &'static str,
        /// Lower bound as given.
        min: f32,
        /// Upper bound as given.
        max: f32,
    },

    /// A grid emission zone has an axis with no cells.
    #[error("emitter `{emitter}`: grid zone needs at least one cell per axis, got {cells:?}")]
    EmptyGrid {
        /// Emitter name.
        emitter: String,
        /// Cell counts as given.
        cells: [u32; 3],
    },

    /// The configuration text is not valid TOML for this schema.
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
