//! Helpers for safely mutating environment variables in tests.
//!
//! Each mutation acquires a global re-entrant mutex and returns an RAII guard
//! that restores the previous state when dropped (removing the variable if it
//! was previously absent). Use [`home_scope`] when a test needs the home
//! directory lookup to point at a fixture for its whole duration.
//!
//! # Examples
//!
//! ```
//! use test_helpers::env;
//!
//! let _g = env::set_var("KEY", "VALUE");
//! // `KEY` is set to `VALUE` for the duration of the guard.
//! ```

use parking_lot::{ReentrantMutex, ReentrantMutexGuard};
use std::env;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

static ENV_MUTEX: LazyLock<ReentrantMutex<()>> = LazyLock::new(ReentrantMutex::default);

/// Variables consulted when detecting the user's home directory.
pub const HOME_VARS: [&str; 2] = ["HOME", "USERPROFILE"];

/// RAII guard restoring an environment variable to its prior value on drop.
#[must_use = "dropping restores the prior value"]
pub struct EnvVarGuard {
    key: String,
    original: Option<OsString>,
}

impl fmt::Debug for EnvVarGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvVarGuard")
            .field("key", &self.key)
            .field("had_original", &self.original.is_some())
            .finish_non_exhaustive()
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        let _guard = ENV_MUTEX.lock();
        if let Some(val) = self.original.take() {
            // SAFETY: We hold `ENV_MUTEX` during restoration.
            unsafe { env::set_var(&self.key, val) };
        } else {
            // SAFETY: We hold `ENV_MUTEX` during restoration.
            unsafe { env::remove_var(&self.key) };
        }
    }
}

/// RAII guard that serialises environment access for its lifetime.
#[must_use = "dropping releases the environment lock"]
pub struct EnvVarLock {
    _guard: ReentrantMutexGuard<'static, ()>,
}

impl EnvVarLock {
    /// Sets an environment variable while holding the global lock.
    pub fn set_var<K, V>(&self, key: K, value: V) -> EnvVarGuard
    where
        K: Into<String>,
        V: AsRef<OsStr>,
    {
        set_var(key, value)
    }

    /// Removes an environment variable while holding the global lock.
    pub fn remove_var<K>(&self, key: K) -> EnvVarGuard
    where
        K: Into<String>,
    {
        remove_var(key)
    }
}

/// RAII scope that holds the environment lock while retaining guards.
///
/// Guards are restored before the lock is released.
#[must_use = "dropping releases the environment lock and restores guards"]
pub struct EnvScope {
    guards: Vec<EnvVarGuard>,
    _lock: EnvVarLock,
}

impl EnvScope {
    /// Create a scope after running `builder` while holding the lock.
    ///
    /// # Examples
    /// ```
    /// use test_helpers::env;
    ///
    /// let _scope = env::EnvScope::new_with(|lock| {
    ///     vec![lock.remove_var("FOO"), lock.remove_var("BAR")]
    /// });
    /// ```
    pub fn new_with<F>(builder: F) -> Self
    where
        F: FnOnce(&EnvVarLock) -> Vec<EnvVarGuard>,
    {
        let lock = lock();
        let guards = builder(&lock);
        Self {
            guards,
            _lock: lock,
        }
    }
}

impl Drop for EnvScope {
    fn drop(&mut self) {
        // Restore while the environment lock is still held.
        let guards = std::mem::take(&mut self.guards);
        drop(guards);
    }
}

fn mutate_env_var<F>(key: String, mutator: F) -> EnvVarGuard
where
    F: FnOnce(&str),
{
    let _guard = ENV_MUTEX.lock();
    let original = env::var_os(&key);
    mutator(&key);
    EnvVarGuard { key, original }
}

/// Sets an environment variable and returns a guard restoring its prior value.
///
/// # Examples
/// ```
/// use test_helpers::env;
/// let _g = env::set_var("FOO", "bar");
/// assert!(matches!(std::env::var("FOO"), Ok(ref value) if value == "bar"));
/// ```
pub fn set_var<K, V>(key: K, value: V) -> EnvVarGuard
where
    K: Into<String>,
    V: AsRef<OsStr>,
{
    // SAFETY: `mutate_env_var` holds `ENV_MUTEX` while the closure runs.
    mutate_env_var(key.into(), |k| unsafe { env::set_var(k, value.as_ref()) })
}

/// Removes an environment variable and returns a guard restoring its prior value.
///
/// # Examples
/// ```
/// use test_helpers::env;
/// let _g = env::remove_var("FOO");
/// assert!(std::env::var("FOO").is_err());
/// ```
pub fn remove_var<K>(key: K) -> EnvVarGuard
where
    K: Into<String>,
{
    // SAFETY: `mutate_env_var` holds `ENV_MUTEX` while the closure runs.
    mutate_env_var(key.into(), |k| unsafe { env::remove_var(k) })
}

/// Acquire the global environment lock for the lifetime of the guard.
pub fn lock() -> EnvVarLock {
    EnvVarLock {
        _guard: ENV_MUTEX.lock(),
    }
}

/// Point every home-directory variable at `home` until the scope drops.
///
/// # Examples
/// ```
/// use test_helpers::env;
///
/// let _scope = env::home_scope("/tmp/fixture-home");
/// assert_eq!(std::env::var("HOME").ok().as_deref(), Some("/tmp/fixture-home"));
/// ```
pub fn home_scope(home: impl AsRef<Path>) -> EnvScope {
    EnvScope::new_with(|lock| {
        HOME_VARS
            .iter()
            .map(|key| lock.set_var(*key, home.as_ref()))
            .collect()
    })
}

/// Remove every home-directory variable until the scope drops.
pub fn without_home() -> EnvScope {
    EnvScope::new_with(|lock| HOME_VARS.iter().map(|key| lock.remove_var(*key)).collect())
}
