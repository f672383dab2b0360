//! Record describing where a configuration file was found.

use std::path::{Path, PathBuf};

use camino::Utf8Path;

/// A successful search.
///
/// The record is immutable: every field is fixed when the file is found.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolutionResult {
    start_directory: PathBuf,
    containing_directory: PathBuf,
    resolved_path: PathBuf,
}

impl ResolutionResult {
    pub(crate) const fn new(
        start_directory: PathBuf,
        containing_directory: PathBuf,
        resolved_path: PathBuf,
    ) -> Self {
        Self {
            start_directory,
            containing_directory,
            resolved_path,
        }
    }

    /// Absolute directory the upward walk started from.
    #[must_use]
    pub fn start_directory(&self) -> &Path {
        &self.start_directory
    }

    /// Directory that held the match: either a visited directory or its
    /// dot-subdirectory.
    #[must_use]
    pub fn containing_directory(&self) -> &Path {
        &self.containing_directory
    }

    /// Absolute path of the matched file.
    #[must_use]
    pub fn resolved_path(&self) -> &Path {
        &self.resolved_path
    }

    /// The resolved path as UTF-8, or `None` if it is not representable.
    #[must_use]
    pub fn utf8_resolved_path(&self) -> Option<&Utf8Path> {
        Utf8Path::from_path(&self.resolved_path)
    }

    /// The containing directory as UTF-8, or `None` if it is not
    /// representable.
    #[must_use]
    pub fn utf8_containing_directory(&self) -> Option<&Utf8Path> {
        Utf8Path::from_path(&self.containing_directory)
    }

    /// Consumes the record, returning the resolved path.
    #[must_use]
    pub fn into_resolved_path(self) -> PathBuf {
        self.resolved_path
    }
}
