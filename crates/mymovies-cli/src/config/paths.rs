//! Config directory resolution.

use std::path::PathBuf;

use anyhow::{Result, bail};

/// Config file name inside the config directory.
const CONFIG_FILE: &str = "config.toml";

/// Application directory under the XDG config root.
const APP_DIR: &str = "mymovies";

/// Resolves the config file path.
///
/// - If `dir` is `Some`, returns `{dir}/config.toml`.
/// - Else if `XDG_CONFIG_HOME` is set, returns `$XDG_CONFIG_HOME/mymovies/config.toml`.
/// - Otherwise returns `~/.config/mymovies/config.toml`.
///
/// # Errors
///
/// Returns an error if no directory can be determined (when `dir` is `None`).
pub fn resolve_config_path(dir: Option<&PathBuf>) -> Result<PathBuf> {
    resolve_with(dir, |name| std::env::var(name).ok())
}

/// Resolution with an injectable environment lookup.
fn resolve_with<F>(dir: Option<&PathBuf>, env: F) -> Result<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(d) = dir {
        return Ok(d.join(CONFIG_FILE));
    }

    let non_empty = |name: &str| env(name).filter(|v| !v.is_empty());

    if let Some(xdg) = non_empty("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join(APP_DIR).join(CONFIG_FILE));
    }
    if let Some(home) = non_empty("HOME") {
        return Ok(PathBuf::from(home)
            .join(".config")
            .join(APP_DIR)
            .join(CONFIG_FILE));
    }
    bail!("neither XDG_CONFIG_HOME nor HOME is set; pass --dir")
}
