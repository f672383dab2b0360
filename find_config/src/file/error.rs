//! Error constructors shared by file reading and loading helpers.

use crate::FindError;

use std::error::Error;
use std::path::Path;
use std::sync::Arc;

/// Construct a [`FindError::File`] for a resolved path.
pub(super) fn file_error(
    path: &Path,
    err: impl Into<Box<dyn Error + Send + Sync>>,
) -> Arc<FindError> {
    Arc::new(FindError::File {
        path: path.to_path_buf(),
        source: err.into(),
    })
}

/// Construct a [`FindError::Load`] for a module the loader rejected.
pub(super) fn load_error(
    path: &Path,
    err: impl Into<Box<dyn Error + Send + Sync>>,
) -> Arc<FindError> {
    Arc::new(FindError::load(path, err))
}

/// Construct a [`FindError::Load`] describing a format the loader rejects.
#[cfg(any(not(feature = "toml"), not(feature = "json5")))]
pub(super) fn unsupported_format(path: &Path, msg: impl Into<String>) -> Arc<FindError> {
    load_error(
        path,
        std::io::Error::new(std::io::ErrorKind::Unsupported, msg.into()),
    )
}
