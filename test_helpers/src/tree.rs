//! Builder for temporary directory hierarchies used by search tests.
//!
//! # Examples
//!
//! ```
//! use test_helpers::tree::TreeBuilder;
//!
//! # fn main() -> anyhow::Result<()> {
//! let tree = TreeBuilder::new()?
//!     .file("a/.config/app.conf", "key = 1")?
//!     .dir("a/b/c")?
//!     .finish();
//! assert!(tree.path().join("a/.config/app.conf").is_file());
//! assert!(tree.path().join("a/b/c").is_dir());
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use tempfile::TempDir;

/// Lays out files and directories beneath a fresh temporary directory.
#[derive(Debug)]
pub struct TreeBuilder {
    root: TempDir,
}

impl TreeBuilder {
    /// Creates an empty temporary root.
    ///
    /// # Errors
    ///
    /// Returns an error when the temporary directory cannot be created.
    pub fn new() -> Result<Self> {
        let root = TempDir::new().context("create temporary tree root")?;
        Ok(Self { root })
    }

    /// Root of the tree being built.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates `relative` and any missing parents as directories.
    ///
    /// # Errors
    ///
    /// Returns an error when a directory cannot be created.
    pub fn dir(self, relative: impl AsRef<Path>) -> Result<Self> {
        let path = self.root.path().join(relative.as_ref());
        std::fs::create_dir_all(&path)
            .with_context(|| format!("create directory {}", path.display()))?;
        Ok(self)
    }

    /// Writes `contents` to `relative`, creating parent directories first.
    ///
    /// # Errors
    ///
    /// Returns an error when a parent directory or the file cannot be written.
    pub fn file(self, relative: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> Result<Self> {
        let path = self.root.path().join(relative.as_ref());
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
        std::fs::write(&path, contents)
            .with_context(|| format!("write file {}", path.display()))?;
        Ok(self)
    }

    /// Finishes the tree. The directory is removed when the result drops.
    #[must_use]
    pub fn finish(self) -> TempDir {
        self.root
    }
}

impl From<TempDir> for TreeBuilder {
    /// Continues building beneath an existing temporary directory.
    fn from(root: TempDir) -> Self {
        Self { root }
    }
}

/// Joins `relative` onto `root`, returning a UTF-8 path for assertions.
///
/// # Errors
///
/// Returns an error when the joined path is not valid UTF-8.
pub fn utf8_join(root: &Path, relative: impl AsRef<Path>) -> Result<Utf8PathBuf> {
    let joined: PathBuf = root.join(relative.as_ref());
    Utf8PathBuf::from_path_buf(joined)
        .map_err(|path| anyhow::anyhow!("path is not valid UTF-8: {}", path.display()))
}
