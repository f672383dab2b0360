//! Search-then-consume conveniences.
//!
//! Each helper runs [`search`] and hands the resolved path to a collaborator.
//! "Not found" stays `Ok(None)`; only failures after a file was found are
//! reported as errors.

use figment::Figment;
use tracing::debug;

use crate::file::{ModuleLoader, load_config_module, read_text_file};
use crate::{FindResult, LoadResultExt, SearchOptions};

use super::search;

/// Find `filename` as a plain file and read it as text.
///
/// Module resolution is always disabled here, whatever `options` says, so
/// `app` never reads `app.js` or `app/index.json` as text. Use
/// [`crate::resolve_path`] with [`crate::read_text_file`] to read a module
/// match. The configured [`crate::TextEncoding`] and [`crate::OpenFlag`] are
/// used to read the file.
///
/// # Errors
///
/// Returns [`crate::FindError::File`] if the file was found but could not be
/// opened, read or decoded.
///
/// # Examples
///
/// ```rust,no_run
/// use find_config::{SearchOptions, read_text};
///
/// # fn run() -> find_config::FindResult<()> {
/// let options = SearchOptions::default();
/// match read_text(".apprc", &options)? {
///     Some(text) => println!("{text}"),
///     None => println!("no .apprc found"),
/// }
/// # Ok(())
/// # }
/// ```
pub fn read_text(filename: &str, options: &SearchOptions) -> FindResult<Option<String>> {
    let direct = options.with_module_resolution(false);
    let Some(found) = search(filename, &direct) else {
        return Ok(None);
    };
    debug!(
        path = %found.resolved_path().display(),
        encoding = %options.file_encoding(),
        "reading configuration file"
    );
    read_text_file(found.resolved_path(), options.file_encoding(), options.open_flag()).map(Some)
}

/// Find `filename` with module resolution and load it into a [`Figment`].
///
/// # Errors
///
/// Returns [`crate::FindError::File`] when the module cannot be read and
/// [`crate::FindError::Load`] when its contents fail to parse.
pub fn load_module(filename: &str, options: &SearchOptions) -> FindResult<Option<Figment>> {
    let modular = options.with_module_resolution(true);
    let Some(found) = search(filename, &modular) else {
        return Ok(None);
    };
    debug!(path = %found.resolved_path().display(), "loading configuration module");
    load_config_module(found.resolved_path()).map(Some)
}

/// Find `filename` with module resolution and load it with `loader`.
///
/// # Errors
///
/// Returns [`crate::FindError::Load`] wrapping the loader's error.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use find_config::{SearchOptions, load_module_with};
///
/// # fn run() -> find_config::FindResult<()> {
/// let options = SearchOptions::default();
/// let size = load_module_with("app", &options, &|path: &Path| {
///     std::fs::metadata(path).map(|meta| meta.len())
/// })?;
/// println!("{size:?}");
/// # Ok(())
/// # }
/// ```
pub fn load_module_with<L>(
    filename: &str,
    options: &SearchOptions,
    loader: &L,
) -> FindResult<Option<L::Output>>
where
    L: ModuleLoader,
{
    let modular = options.with_module_resolution(true);
    let Some(found) = search(filename, &modular) else {
        return Ok(None);
    };
    debug!(path = %found.resolved_path().display(), "loading configuration module");
    loader
        .load(found.resolved_path())
        .into_find_load(found.resolved_path())
        .map(Some)
}
