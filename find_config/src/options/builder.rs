//! Builder for [`SearchOptions`].
//!
//! The builder starts from the documented defaults and lets callers override
//! individual settings before producing an immutable options value.

use std::path::PathBuf;
use std::sync::Arc;

use crate::strategy::{ModuleResolver, NodeModuleResolver};

use super::{DEFAULT_DOT_DIRECTORY, OpenFlag, SearchOptions, TextEncoding};

/// Builder for [`SearchOptions`].
///
/// # Examples
///
/// ```rust,no_run
/// use find_config::{SearchOptions, search};
///
/// let options = SearchOptions::builder()
///     .start_directory("./workspace/crate")
///     .strip_leading_dot(false)
///     .build();
/// if let Some(found) = search(".toolrc", &options) {
///     println!("using {}", found.resolved_path().display());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SearchOptionsBuilder {
    options: SearchOptions,
}

impl Default for SearchOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchOptionsBuilder {
    /// Creates a builder initialised with the default options.
    #[must_use]
    pub fn new() -> Self {
        Self {
            options: SearchOptions {
                start_directory: None,
                dot_directory_name: String::from(DEFAULT_DOT_DIRECTORY),
                strip_leading_dot: true,
                use_module_resolution: false,
                check_home_directory: true,
                home_directory: None,
                module_resolver: Arc::new(NodeModuleResolver::default()),
                file_encoding: TextEncoding::default(),
                open_flag: OpenFlag::default(),
            },
        }
    }

    pub(super) const fn from_options(options: SearchOptions) -> Self {
        Self { options }
    }

    /// Sets the directory the upward walk starts from.
    ///
    /// Relative paths are resolved against the working directory at search
    /// time.
    #[must_use]
    pub fn start_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.options.start_directory = Some(dir.into());
        self
    }

    /// Overrides the subdirectory probed inside every visited directory.
    ///
    /// The name is always joined beneath the visited directory; a root or
    /// prefix component is ignored.
    #[must_use]
    pub fn dot_directory_name(mut self, name: impl Into<String>) -> Self {
        self.options.dot_directory_name = name.into();
        self
    }

    /// Controls whether a leading `.` is stripped from the filename inside the
    /// dot-subdirectory.
    #[must_use]
    pub const fn strip_leading_dot(mut self, strip: bool) -> Self {
        self.options.strip_leading_dot = strip;
        self
    }

    /// Selects the module-style strategy instead of the direct-file strategy.
    #[must_use]
    pub const fn use_module_resolution(mut self, enabled: bool) -> Self {
        self.options.use_module_resolution = enabled;
        self
    }

    /// Controls whether the home directory is probed after the walk.
    #[must_use]
    pub const fn check_home_directory(mut self, enabled: bool) -> Self {
        self.options.check_home_directory = enabled;
        self
    }

    /// Uses `dir` as the home directory instead of detecting it.
    #[must_use]
    pub fn home_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.options.home_directory = Some(dir.into());
        self
    }

    /// Replaces the resolver used by the module-style strategy.
    #[must_use]
    pub fn module_resolver(mut self, resolver: impl ModuleResolver + 'static) -> Self {
        self.options.module_resolver = Arc::new(resolver);
        self
    }

    /// Sets the encoding used by [`crate::read_text`].
    #[must_use]
    pub const fn file_encoding(mut self, encoding: TextEncoding) -> Self {
        self.options.file_encoding = encoding;
        self
    }

    /// Sets the open mode used by [`crate::read_text`].
    #[must_use]
    pub const fn open_flag(mut self, flag: OpenFlag) -> Self {
        self.options.open_flag = flag;
        self
    }

    /// Finalises the builder and returns the [`SearchOptions`].
    #[must_use]
    pub fn build(self) -> SearchOptions {
        self.options
    }
}
