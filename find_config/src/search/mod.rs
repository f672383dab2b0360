//! Upward search for a configuration file.
//!
//! Starting from a directory, every ancestor up to the filesystem root is
//! probed twice: once for the file itself and once inside the directory's
//! dot-subdirectory. The user's home directory is probed last. The first hit
//! wins; probe failures read as "absent" and never surface as errors.

mod load;
mod outcome;
mod walk;

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::SearchOptions;
use crate::file::path::{absolute_normalised, join_relative};
use crate::strategy::{CandidateStrategy, DirectFile, ModuleStyle};

pub use load::{load_module, load_module_with, read_text};
pub use outcome::ResolutionResult;
pub use walk::DirectoryWalk;

use walk::resolve_start_directory;

/// Search for `filename` from the configured start directory upwards.
///
/// Returns `None` when `filename` is empty or no probed location holds it.
///
/// # Examples
///
/// ```rust,no_run
/// use find_config::{SearchOptions, search};
///
/// let options = SearchOptions::builder().start_directory("/srv/app").build();
/// if let Some(found) = search(".apprc", &options) {
///     println!("using {}", found.resolved_path().display());
/// }
/// ```
#[must_use]
pub fn search(filename: &str, options: &SearchOptions) -> Option<ResolutionResult> {
    if filename.is_empty() {
        debug!("empty filename; nothing to search for");
        return None;
    }
    let start =
        resolve_start_directory(options.start_directory().unwrap_or_else(|| Path::new(".")))?;
    let resolver = Resolver::new(filename, options);
    if options.use_module_resolution() {
        resolver.run(&ModuleStyle::new(options.module_resolver()), start)
    } else {
        resolver.run(&DirectFile, start)
    }
}

/// Search for `filename` and return only the resolved path.
#[must_use]
pub fn resolve_path(filename: &str, options: &SearchOptions) -> Option<PathBuf> {
    search(filename, options).map(ResolutionResult::into_resolved_path)
}

struct Resolver<'a> {
    filename: &'a str,
    dotless: &'a str,
    options: &'a SearchOptions,
}

impl<'a> Resolver<'a> {
    fn new(filename: &'a str, options: &'a SearchOptions) -> Self {
        let dotless = if options.strip_leading_dot() {
            filename.strip_prefix('.').unwrap_or(filename)
        } else {
            filename
        };
        Self {
            filename,
            dotless,
            options,
        }
    }

    fn run(&self, strategy: &dyn CandidateStrategy, start: PathBuf) -> Option<ResolutionResult> {
        debug!(
            filename = self.filename,
            start = %start.display(),
            module_resolution = self.options.use_module_resolution(),
            "searching for configuration file"
        );
        let found = DirectoryWalk::from_absolute(Some(start.clone()))
            .find_map(|dir| self.probe(strategy, &dir))
            .or_else(|| self.probe_home(strategy));
        let Some((containing, resolved)) = found else {
            debug!(filename = self.filename, "configuration file not found");
            return None;
        };
        debug!(path = %resolved.display(), "configuration file found");
        Some(ResolutionResult::new(start, containing, resolved))
    }

    /// Probe `dir` directly, then its dot-subdirectory.
    fn probe(&self, strategy: &dyn CandidateStrategy, dir: &Path) -> Option<(PathBuf, PathBuf)> {
        trace!(directory = %dir.display(), "probing directory");
        if let Some(found) = strategy.test(dir, self.filename) {
            return Some((dir.to_path_buf(), found));
        }
        let dot_dir = join_relative(dir, self.options.dot_directory_name());
        strategy
            .test(&dot_dir, self.dotless)
            .map(|found| (dot_dir, found))
    }

    fn probe_home(&self, strategy: &dyn CandidateStrategy) -> Option<(PathBuf, PathBuf)> {
        if !self.options.check_home_directory() {
            return None;
        }
        let Some(home) = self.options.home_directory() else {
            debug!("no home directory available; skipping home probe");
            return None;
        };
        absolute_normalised(&home)
            .inspect_err(|err| {
                debug!(home = %home.display(), error = %err, "cannot resolve home directory");
            })
            .ok()
            .and_then(|resolved| self.probe(strategy, &resolved))
    }
}

#[cfg(test)]
mod tests;
