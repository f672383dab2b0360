//! Reading resolved configuration files as text.

use std::io::Read as _;
use std::path::Path;

use crate::{FindResult, OpenFlag, TextEncoding};

use super::error::file_error;

/// Read `path` with the given open mode and decode it as text.
///
/// # Errors
///
/// Returns [`crate::FindError::File`] when the file cannot be opened or read,
/// or when its bytes are invalid for a strict `encoding`.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use find_config::{OpenFlag, TextEncoding, read_text_file};
///
/// # fn run() -> find_config::FindResult<()> {
/// let text = read_text_file(Path::new("app.conf"), TextEncoding::Latin1, OpenFlag::Read)?;
/// println!("{text}");
/// # Ok(())
/// # }
/// ```
pub fn read_text_file(path: &Path, encoding: TextEncoding, flag: OpenFlag) -> FindResult<String> {
    let mut file = flag
        .open_options()
        .open(path)
        .map_err(|e| file_error(path, e))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|e| file_error(path, e))?;
    encoding.decode(bytes).map_err(|e| file_error(path, e))
}
