//! Per-call configuration for a configuration file search.
//!
//! [`SearchOptions`] is an immutable value built through
//! [`SearchOptionsBuilder`]. Every search receives its options explicitly, so
//! concurrent searches with different settings never interfere.

mod builder;
mod encoding;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use dirs::home_dir;

use crate::strategy::ModuleResolver;

pub use builder::SearchOptionsBuilder;
pub use encoding::{OpenFlag, TextEncoding};

/// Name of the per-directory subdirectory probed after the directory itself.
pub const DEFAULT_DOT_DIRECTORY: &str = ".config";

/// Options controlling where and how [`crate::search()`] looks for a file.
///
/// # Examples
///
/// ```rust
/// use find_config::SearchOptions;
///
/// let options = SearchOptions::builder()
///     .start_directory("/srv/app/current")
///     .dot_directory_name(".settings")
///     .check_home_directory(false)
///     .build();
/// assert_eq!(options.dot_directory_name(), ".settings");
/// assert!(!options.check_home_directory());
/// ```
#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub(crate) start_directory: Option<PathBuf>,
    pub(crate) dot_directory_name: String,
    pub(crate) strip_leading_dot: bool,
    pub(crate) use_module_resolution: bool,
    pub(crate) check_home_directory: bool,
    pub(crate) home_directory: Option<PathBuf>,
    pub(crate) module_resolver: Arc<dyn ModuleResolver>,
    pub(crate) file_encoding: TextEncoding,
    pub(crate) open_flag: OpenFlag,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptionsBuilder::new().build()
    }
}

impl SearchOptions {
    /// Creates a builder populated with the default options.
    #[must_use]
    pub fn builder() -> SearchOptionsBuilder {
        SearchOptionsBuilder::new()
    }

    /// Returns a builder seeded with these options.
    #[must_use]
    pub fn to_builder(&self) -> SearchOptionsBuilder {
        SearchOptionsBuilder::from_options(self.clone())
    }

    /// Directory the upward walk starts from; `None` means the current
    /// working directory.
    #[must_use]
    pub fn start_directory(&self) -> Option<&Path> {
        self.start_directory.as_deref()
    }

    /// Name of the subdirectory probed inside every visited directory.
    #[must_use]
    pub fn dot_directory_name(&self) -> &str {
        &self.dot_directory_name
    }

    /// Whether a single leading `.` is stripped from the filename when probing
    /// the dot-subdirectory.
    #[must_use]
    pub const fn strip_leading_dot(&self) -> bool {
        self.strip_leading_dot
    }

    /// Whether the module-style strategy is used instead of the direct-file
    /// strategy.
    #[must_use]
    pub const fn use_module_resolution(&self) -> bool {
        self.use_module_resolution
    }

    /// Whether the home directory is probed once the walk reaches the root.
    #[must_use]
    pub const fn check_home_directory(&self) -> bool {
        self.check_home_directory
    }

    /// The module resolver used by the module-style strategy.
    #[must_use]
    pub fn module_resolver(&self) -> &dyn ModuleResolver {
        self.module_resolver.as_ref()
    }

    /// Encoding used by [`crate::read_text`].
    #[must_use]
    pub const fn file_encoding(&self) -> TextEncoding {
        self.file_encoding
    }

    /// Open mode used by [`crate::read_text`].
    #[must_use]
    pub const fn open_flag(&self) -> OpenFlag {
        self.open_flag
    }

    /// Returns the home directory probed after the walk.
    ///
    /// An explicit override wins; otherwise `HOME`, then `USERPROFILE`, then
    /// the platform lookup provided by `dirs` are consulted.
    #[must_use]
    pub fn home_directory(&self) -> Option<PathBuf> {
        self.home_directory
            .clone()
            .or_else(detected_home_directory)
    }

    /// Copy of these options with module resolution forced on or off.
    pub(crate) fn with_module_resolution(&self, enabled: bool) -> Self {
        Self {
            use_module_resolution: enabled,
            ..self.clone()
        }
    }
}

fn detected_home_directory() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|value| !value.is_empty())
        .or_else(|| std::env::var_os("USERPROFILE").filter(|value| !value.is_empty()))
        .map(PathBuf::from)
        .or_else(home_dir)
}
