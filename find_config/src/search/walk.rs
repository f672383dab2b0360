//! Upward directory walk from a starting directory to the filesystem root.

use std::iter::FusedIterator;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::file::path::absolute_normalised;

/// Lazily yields a directory and each of its ancestors, ending at the root.
///
/// The starting directory is made absolute and normalised lexically before
/// the walk begins, so every directory is produced exactly once.
///
/// # Examples
///
/// ```rust
/// # #[cfg(unix)]
/// # {
/// use std::path::PathBuf;
/// use find_config::DirectoryWalk;
///
/// let visited: Vec<PathBuf> = DirectoryWalk::new("/srv/app/../web").collect();
/// assert_eq!(
///     visited,
///     [PathBuf::from("/srv/web"), PathBuf::from("/srv"), PathBuf::from("/")]
/// );
/// # }
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct DirectoryWalk {
    next: Option<PathBuf>,
}

impl DirectoryWalk {
    /// Starts a walk at `start`, resolving relative paths against the current
    /// working directory.
    ///
    /// When the working directory cannot be read the walk is empty.
    pub fn new(start: impl AsRef<Path>) -> Self {
        Self::from_absolute(resolve_start_directory(start.as_ref()))
    }

    pub(crate) const fn from_absolute(start: Option<PathBuf>) -> Self {
        Self { next: start }
    }
}

impl Iterator for DirectoryWalk {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        let current = self.next.take()?;
        self.next = current
            .parent()
            .filter(|parent| *parent != current.as_path())
            .map(Path::to_path_buf);
        Some(current)
    }
}

impl FusedIterator for DirectoryWalk {}

/// Resolve `start` to the absolute directory the walk begins from.
pub(crate) fn resolve_start_directory(start: &Path) -> Option<PathBuf> {
    absolute_normalised(start)
        .inspect_err(|err| {
            warn!(
                start = %start.display(),
                error = %err,
                "cannot resolve starting directory; skipping upward walk"
            );
        })
        .ok()
}
