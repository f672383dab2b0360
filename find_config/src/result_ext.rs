//! Extensions for mapping collaborator errors into `FindResult` concisely.
//!
//! Loaders and readers report their own error types. These helpers attach
//! the resolved path and wrap the failure in the crate's shared
//! `FindResult<T>` alias (`Result<T, Arc<FindError>>`).
//!
//! # Examples
//!
//! ```
//! use std::path::Path;
//! use find_config::{FindError, FindResult, LoadResultExt};
//!
//! fn parse_port(path: &Path, raw: &str) -> FindResult<u16> {
//!     raw.trim().parse::<u16>().into_find_load(path)
//! }
//!
//! let err = parse_port(Path::new("port.conf"), "eighty").unwrap_err();
//! assert!(matches!(err.as_ref(), FindError::Load { .. }));
//! ```

use std::path::Path;
use std::sync::Arc;

use crate::{FindError, FindResult};

/// Extension converting loader failures into [`FindError::Load`].
pub trait LoadResultExt<T> {
    /// Convert `Result<T, E>` into `FindResult<T>`, recording `path` as the
    /// module that failed to load.
    ///
    /// # Errors
    ///
    /// Propagates the original error wrapped in `Arc<FindError>`.
    fn into_find_load(self, path: &Path) -> FindResult<T>;
}

impl<T, E> LoadResultExt<T> for Result<T, E>
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    fn into_find_load(self, path: &Path) -> FindResult<T> {
        self.map_err(|e| Arc::new(FindError::load(path, e)))
    }
}
