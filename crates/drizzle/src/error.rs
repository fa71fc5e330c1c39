//! # Scene Error Types

use std::path::PathBuf;

use drizzle_particles::ConfigError;
use thiserror::Error;

/// Errors from loading or querying a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    /// An emitter description is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The scene file is not valid TOML for this schema.
    #[error("invalid scene description: {0}")]
    Parse(#[from] toml::de::Error),

    /// The scene file could not be read.
    #[error("failed to read scene file {}: {source}", .path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A scene needs at least one emitter.
    #[error("scene has no emitters")]
    Empty,

    /// Two emitters share a name.
    #[error("emitter name `{0}` is used more than once")]
    DuplicateEmitter(String),

    /// No emitter has the requested name.
    #[error("no emitter named `{0}`")]
    UnknownEmitter(String),
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;
