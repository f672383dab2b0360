//! Locate configuration files by walking up the directory tree.
//!
//! [`search()`] looks for a file in a starting directory and each of its
//! ancestors, checking both the directory itself and a dot-subdirectory
//! (`.config` by default) before moving up. The user's home directory is
//! probed last. The first match wins.
//!
//! ```rust,no_run
//! use find_config::{SearchOptions, search};
//!
//! let options = SearchOptions::default();
//! match search(".apprc", &options) {
//!     Some(found) => println!("found {}", found.resolved_path().display()),
//!     None => println!("no configuration"),
//! }
//! ```
//!
//! Module-style resolution infers extensions and directory index files the
//! way `require` does; [`load_module`] uses it to load the match into a
//! [`figment::Figment`].

use std::sync::Arc;

mod error;
mod file;
mod options;
mod result_ext;
mod search;
mod strategy;

pub use error::FindError;
pub use file::{ModuleLoader, canonicalise, load_config_module, read_text_file};
pub use options::{
    DEFAULT_DOT_DIRECTORY, OpenFlag, SearchOptions, SearchOptionsBuilder, TextEncoding,
};
pub use result_ext::LoadResultExt;
pub use search::{
    DirectoryWalk, ResolutionResult, load_module, load_module_with, read_text, resolve_path,
    search,
};
pub use strategy::{
    CandidateStrategy, DEFAULT_MODULE_EXTENSIONS, DirectFile, ModuleResolver, ModuleStyle,
    NodeModuleResolver,
};

/// Re-export of [`figment`] so loaded modules can be extracted without an
/// extra dependency.
pub use figment;

/// Result type returned once a configuration file has been found.
pub type FindResult<T> = Result<T, Arc<FindError>>;
