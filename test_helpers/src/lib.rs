//! Test helpers shared across crates in the find-config workspace.
//!
//! - [`env`] serialises mutations of process environment variables such as
//!   `HOME`.
//! - [`jail`] runs closures inside a [`figment::Jail`], which also isolates
//!   the working directory.
//! - [`tree`] lays out temporary directory hierarchies for search tests.

pub mod env;
pub mod jail;
pub mod tree;
