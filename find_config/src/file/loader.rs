//! Loading resolved configuration modules.
//!
//! A module loader receives the path produced by a module-style search and
//! turns it into a value. The built-in loader parses the file into a
//! [`Figment`] selected by extension; any `Fn(&Path) -> Result<T, E>` closure
//! can stand in for it.

use std::error::Error;
use std::path::Path;

use figment::Figment;

use crate::FindResult;

use super::error::file_error;
use super::parser::parse_config_by_format;

/// Loads a resolved module path into a value.
pub trait ModuleLoader {
    /// Value produced by a successful load.
    type Output;
    /// Error reported when the module cannot be loaded.
    type Error: Into<Box<dyn Error + Send + Sync>>;

    /// Load the module at `path`.
    ///
    /// # Errors
    ///
    /// Returns the loader's error when `path` cannot be turned into a value.
    fn load(&self, path: &Path) -> Result<Self::Output, Self::Error>;
}

impl<F, T, E> ModuleLoader for F
where
    F: Fn(&Path) -> Result<T, E>,
    E: Into<Box<dyn Error + Send + Sync>>,
{
    type Output = T;
    type Error = E;

    fn load(&self, path: &Path) -> Result<T, E> {
        self(path)
    }
}

/// Load a configuration module into a [`Figment`], selecting the parser from
/// the file extension.
///
/// # Examples
///
/// ```rust,no_run
/// use find_config::load_config_module;
/// use serde::Deserialize;
/// use std::path::Path;
///
/// #[derive(Deserialize)]
/// struct Config {
///     host: String,
/// }
///
/// # fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let figment = load_config_module(Path::new("/etc/app/config.toml"))?;
/// let config: Config = figment.extract()?;
/// println!("host = {}", config.host);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns [`crate::FindError::File`] if the file cannot be read and
/// [`crate::FindError::Load`] if its contents fail to parse.
pub fn load_config_module(path: &Path) -> FindResult<Figment> {
    let data = std::fs::read_to_string(path).map_err(|e| file_error(path, e))?;
    parse_config_by_format(path, &data)
}
