//! Lexical path helpers shared by the walker and the candidate strategies.

use std::io;
use std::path::{Component, Path, PathBuf};

/// Canonicalise `p` using platform-specific rules.
///
/// Returns an absolute path with symlinks resolved. On Windows the
/// [`dunce`](https://docs.rs/dunce/latest/dunce/) crate is used to avoid
/// introducing UNC prefixes into resolved paths.
///
/// # Errors
///
/// Returns the underlying I/O error if the path does not exist or cannot be
/// inspected.
pub fn canonicalise(p: &Path) -> io::Result<PathBuf> {
    #[cfg(windows)]
    {
        dunce::canonicalize(p)
    }
    #[cfg(not(windows))]
    {
        std::fs::canonicalize(p)
    }
}

/// Normalise `path` without touching the filesystem.
///
/// `.` components are dropped and `..` removes the preceding normal
/// component. A `..` directly below the root is discarded, so the result
/// never climbs above it. Leading `..` components of relative paths are kept.
pub(crate) fn normalise_lexically(path: &Path) -> PathBuf {
    let mut normalised = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalised.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalised.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                Some(Component::ParentDir | Component::CurDir) | None => {
                    normalised.push(component);
                }
            },
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                normalised.push(component);
            }
        }
    }
    if normalised.as_os_str().is_empty() {
        normalised.push(Component::CurDir);
    }
    normalised
}

/// Join `name` onto `dir` as a relative path and normalise the result.
///
/// Root and prefix components in `name` are ignored so an absolute name is
/// still looked up beneath `dir`.
pub(crate) fn join_relative(dir: &Path, name: &str) -> PathBuf {
    let mut joined = dir.to_path_buf();
    for component in Path::new(name).components() {
        match component {
            Component::Normal(_) | Component::ParentDir => joined.push(component),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }
    normalise_lexically(&joined)
}

/// Resolve `path` to an absolute, lexically normalised path.
///
/// Relative paths are joined onto the current working directory.
///
/// # Errors
///
/// Returns the I/O error raised while reading the working directory.
pub(crate) fn absolute_normalised(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        return Ok(normalise_lexically(path));
    }
    let cwd = std::env::current_dir()?;
    Ok(normalise_lexically(&cwd.join(path)))
}

/// Whether `path` names a regular file, following symlinks.
pub(crate) fn is_regular_file(path: &Path) -> bool {
    std::fs::metadata(path).is_ok_and(|meta| meta.is_file())
}
