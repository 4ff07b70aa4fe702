//! Where folio keeps its files.

use std::ffi::OsString;
use std::path::PathBuf;

/// Debug log written when `DEBUG` is set, in the OS temp directory.
#[must_use]
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join("folio.log")
}

/// Per-user configuration root for the current platform.
///
/// `XDG_CONFIG_HOME` wins on Unix, then the platform default under `HOME`.
/// Windows uses `APPDATA`.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    config_dir_with(std::env::var_os)
}

#[cfg(windows)]
fn config_dir_with(env: impl Fn(&'static str) -> Option<OsString>) -> Option<PathBuf> {
    env("APPDATA").map(PathBuf::from)
}

#[cfg(not(windows))]
fn config_dir_with(env: impl Fn(&'static str) -> Option<OsString>) -> Option<PathBuf> {
    if let Some(xdg) = env("XDG_CONFIG_HOME").filter(|dir| !dir.is_empty()) {
        return Some(PathBuf::from(xdg));
    }
    let home = PathBuf::from(env("HOME")?);
    if cfg!(target_os = "macos") {
        Some(home.join("Library").join("Application Support"))
    } else {
        Some(home.join(".config"))
    }
}
