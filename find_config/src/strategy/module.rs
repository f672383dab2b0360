//! Module-style resolution: extension inference and directory index files.
//!
//! [`NodeModuleResolver`] follows the familiar `require` lookup order:
//!
//! 1. the specifier itself, when it names a regular file;
//! 2. the specifier with each extension appended (`app` → `app.js`);
//! 3. when the specifier is a directory, the `main` entry of its
//!    `package.json`, then `index` with each extension appended.
//!
//! Resolved paths are canonicalised so callers receive the real file path.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::trace;

use crate::file::canonicalise;
use crate::file::path::{is_regular_file, normalise_lexically};

/// Extensions tried by [`NodeModuleResolver::default`], in order.
pub const DEFAULT_MODULE_EXTENSIONS: &[&str] = &[".js", ".json", ".node"];

const PACKAGE_MANIFEST: &str = "package.json";
const DEFAULT_INDEX_STEM: &str = "index";

/// Resolves a path-like specifier to the real path of the file it names.
///
/// Implementations must report every failure, including "nothing matched",
/// as an error; the module-style strategy treats all errors as "not found".
pub trait ModuleResolver: fmt::Debug + Send + Sync {
    /// Resolve `specifier` to an existing file.
    ///
    /// # Errors
    ///
    /// Returns an error when no variant of `specifier` exists or when the
    /// filesystem cannot be queried.
    fn resolve(&self, specifier: &Path) -> io::Result<PathBuf>;
}

/// `require`-style resolver with configurable extensions and index lookup.
///
/// # Examples
///
/// ```rust
/// use find_config::NodeModuleResolver;
///
/// // Only infer TOML and JSON extensions; never look inside directories.
/// let resolver = NodeModuleResolver::new()
///     .extensions(["toml", ".json"])
///     .without_directory_index();
/// assert_eq!(resolver.extension_list(), [".toml", ".json"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeModuleResolver {
    extensions: Vec<String>,
    index_stem: Option<String>,
    package_main: bool,
}

#[derive(Debug, Deserialize)]
struct PackageManifest {
    main: Option<String>,
}

impl Default for NodeModuleResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeModuleResolver {
    /// Creates a resolver trying `.js`, `.json` and `.node`, `index` files and
    /// `package.json` entry points.
    #[must_use]
    pub fn new() -> Self {
        Self {
            extensions: DEFAULT_MODULE_EXTENSIONS
                .iter()
                .map(|ext| (*ext).to_owned())
                .collect(),
            index_stem: Some(String::from(DEFAULT_INDEX_STEM)),
            package_main: true,
        }
    }

    /// Replaces the inferred extensions. A missing leading `.` is added.
    #[must_use]
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|raw| {
                let ext = raw.as_ref();
                if ext.starts_with('.') {
                    ext.to_owned()
                } else {
                    format!(".{ext}")
                }
            })
            .collect();
        self
    }

    /// Overrides the stem of directory index files (`index` by default).
    #[must_use]
    pub fn index_stem(mut self, stem: impl Into<String>) -> Self {
        self.index_stem = Some(stem.into());
        self
    }

    /// Controls whether `package.json` `main` entries are honoured.
    #[must_use]
    pub const fn package_main(mut self, enabled: bool) -> Self {
        self.package_main = enabled;
        self
    }

    /// Disables directory resolution entirely, leaving extension inference.
    #[must_use]
    pub fn without_directory_index(mut self) -> Self {
        self.index_stem = None;
        self.package_main = false;
        self
    }

    /// Extensions tried in order, each with its leading `.`.
    #[must_use]
    pub fn extension_list(&self) -> &[String] {
        &self.extensions
    }

    fn load_as_file(&self, base: &Path) -> Option<PathBuf> {
        if is_regular_file(base) {
            return Some(base.to_path_buf());
        }
        self.extensions
            .iter()
            .map(|ext| append_extension(base, ext))
            .find(|candidate| is_regular_file(candidate))
    }

    fn load_index(&self, dir: &Path) -> Option<PathBuf> {
        let stem = dir.join(self.index_stem.as_deref()?);
        self.extensions
            .iter()
            .map(|ext| append_extension(&stem, ext))
            .find(|candidate| is_regular_file(candidate))
    }

    fn load_package_main(&self, dir: &Path) -> Option<PathBuf> {
        if !self.package_main {
            return None;
        }
        let main = read_package_main(&dir.join(PACKAGE_MANIFEST))?;
        let target = normalise_lexically(&dir.join(main));
        self.load_as_file(&target)
            .or_else(|| self.load_index(&target))
    }

    fn load_as_directory(&self, dir: &Path) -> Option<PathBuf> {
        if !dir.is_dir() {
            return None;
        }
        self.load_package_main(dir).or_else(|| self.load_index(dir))
    }
}

impl ModuleResolver for NodeModuleResolver {
    fn resolve(&self, specifier: &Path) -> io::Result<PathBuf> {
        let found = self
            .load_as_file(specifier)
            .or_else(|| self.load_as_directory(specifier))
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("cannot resolve module '{}'", specifier.display()),
                )
            })?;
        canonicalise(&found)
    }
}

fn append_extension(base: &Path, ext: &str) -> PathBuf {
    let mut raw = base.as_os_str().to_owned();
    raw.push(ext);
    PathBuf::from(raw)
}

fn read_package_main(manifest: &Path) -> Option<String> {
    let data = std::fs::read_to_string(manifest).ok()?;
    serde_json::from_str::<PackageManifest>(&data)
        .inspect_err(|err| {
            trace!(path = %manifest.display(), error = %err, "ignoring unreadable package manifest");
        })
        .ok()
        .and_then(|manifest_data| manifest_data.main)
        .filter(|entry| !entry.trim().is_empty())
}
