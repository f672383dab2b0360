//! Candidate strategies deciding whether a file exists at a probed location.
//!
//! The resolver asks a [`CandidateStrategy`] about two locations in every
//! directory it visits. A strategy answers with the path it found or `None`;
//! it never fails. Filesystem errors such as permission problems are logged
//! and treated exactly like a missing file.

mod module;

use std::io;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::file::path::join_relative;

pub use module::{DEFAULT_MODULE_EXTENSIONS, ModuleResolver, NodeModuleResolver};

/// Tests whether `filename` can be found inside `directory`.
pub trait CandidateStrategy {
    /// Returns the resolved path when `filename` is present in `directory`.
    fn test(&self, directory: &Path, filename: &str) -> Option<PathBuf>;
}

/// Accepts a candidate only when it is a regular file.
///
/// Symlinks are followed, so a link to a file matches while a link to a
/// directory does not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectFile;

impl CandidateStrategy for DirectFile {
    fn test(&self, directory: &Path, filename: &str) -> Option<PathBuf> {
        let candidate = join_relative(directory, filename);
        match std::fs::metadata(&candidate) {
            Ok(meta) if meta.is_file() => Some(candidate),
            Ok(_) => {
                trace!(path = %candidate.display(), "candidate is not a regular file");
                None
            }
            Err(err) => {
                probe_failed(&candidate, &err);
                None
            }
        }
    }
}

/// Resolves candidates through a [`ModuleResolver`], which may infer
/// extensions and directory index files.
#[derive(Debug, Clone, Copy)]
pub struct ModuleStyle<'a> {
    resolver: &'a dyn ModuleResolver,
}

impl<'a> ModuleStyle<'a> {
    /// Creates a strategy delegating to `resolver`.
    #[must_use]
    pub const fn new(resolver: &'a dyn ModuleResolver) -> Self {
        Self { resolver }
    }
}

impl CandidateStrategy for ModuleStyle<'_> {
    fn test(&self, directory: &Path, filename: &str) -> Option<PathBuf> {
        let specifier = join_relative(directory, filename);
        self.resolver
            .resolve(&specifier)
            .inspect_err(|err| probe_failed(&specifier, err))
            .ok()
    }
}

fn probe_failed(candidate: &Path, err: &io::Error) {
    if err.kind() == io::ErrorKind::NotFound {
        trace!(path = %candidate.display(), "candidate not found");
    } else {
        trace!(path = %candidate.display(), error = %err, "ignoring candidate probe failure");
    }
}

#[cfg(test)]
mod tests;
