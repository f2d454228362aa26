//! Environment and directory guards for configuration tests.
//!
//! Configuration merging reads `VUS*` variables and discovers `.vus.toml`
//! from the working directory, so tests mutate both through the guards here
//! and serialise with `#[serial]`.

use std::env;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tempfile::TempDir;

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Set an environment variable while holding the global lock.
pub fn set_var<K: AsRef<OsStr>, V: AsRef<OsStr>>(key: K, value: V) {
    let _guard = lock();
    // SAFETY: the mutex serialises access to the unsynchronised std env calls.
    unsafe { env::set_var(key, value) };
}

/// Remove an environment variable while holding the global lock.
pub fn remove_var<K: AsRef<OsStr>>(key: K) {
    let _guard = lock();
    // SAFETY: the mutex serialises access to the unsynchronised std env calls.
    unsafe { env::remove_var(key) };
}

/// RAII guard that clears captured variables and restores them on drop.
pub struct EnvGuard {
    entries: Vec<(OsString, Option<OsString>)>,
}

impl EnvGuard {
    /// Capture `keys`, removing them from the environment for the guard's
    /// lifetime.
    pub fn new(keys: &[&str]) -> Self {
        let entries = keys
            .iter()
            .map(|key| {
                let previous = {
                    let _guard = lock();
                    env::var_os(key)
                };
                remove_var(key);
                (OsString::from(key), previous)
            })
            .collect();
        Self { entries }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &mut self.entries {
            match value.take() {
                Some(val) => set_var(&*key, val),
                None => remove_var(&*key),
            }
        }
    }
}

/// RAII guard restoring the working directory on drop.
pub struct DirGuard {
    previous: PathBuf,
}

impl DirGuard {
    /// Enter `path`, returning a guard that restores the prior working
    /// directory when dropped.
    pub fn enter(path: impl AsRef<Path>) -> Self {
        let previous = env::current_dir().expect("current dir");
        env::set_current_dir(path.as_ref()).expect("set dir");
        Self { previous }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.previous);
    }
}

/// Write `content` to `.vus.toml` in `dir` and point `VUS_CONFIG_PATH` at it.
///
/// Callers must hold an [`EnvGuard`] capturing `VUS_CONFIG_PATH`.
pub fn setup_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join(".vus.toml");
    fs::write(&path, content).expect("write config");
    set_var("VUS_CONFIG_PATH", path.as_os_str());
    path
}
