//! Helpers for consuming a resolved configuration file.
//!
//! The search only reports where a file lives. This module reads it as text
//! or loads it as a configuration module, and holds the lexical path helpers
//! shared with the resolver.

mod error;
mod loader;
mod parser;
pub(crate) mod path;
mod read;

pub use loader::{ModuleLoader, load_config_module};
pub use path::canonicalise;
pub use read::read_text_file;

#[cfg(test)]
mod tests;
