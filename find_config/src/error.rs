//! Error types produced once a configuration file has been located.
//!
//! The search itself never fails: a missing file is reported as `None`. These
//! errors only describe what happens afterwards, when the resolved file is
//! read or handed to a loader.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while consuming a resolved configuration file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FindError {
    /// Reading or decoding the resolved file failed.
    #[error("Configuration file error in '{path}': {source}")]
    File {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying error reported by the file reader.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The module loader rejected the resolved file.
    #[error("Failed to load configuration module '{path}': {source}")]
    Load {
        /// Path handed to the loader.
        path: PathBuf,
        /// Underlying error reported by the loader.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A textual option such as an encoding name could not be parsed.
    #[error("Invalid value '{value}' for option '{option}'")]
    InvalidOption {
        /// Name of the option being parsed.
        option: &'static str,
        /// Rejected input.
        value: String,
    },
}

impl FindError {
    /// Builds a [`FindError::Load`] for `path` from any loader error.
    #[must_use]
    pub fn load(
        path: impl Into<PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Load {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Returns the path associated with the error, if any.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::File { path, .. } | Self::Load { path, .. } => Some(path),
            Self::InvalidOption { .. } => None,
        }
    }
}
