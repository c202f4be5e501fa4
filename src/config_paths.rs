//! Configuration paths for treelight
//!
//! Config lives under:
//! - Unix/macOS: `~/.config/treelight/`
//! - Windows: `%APPDATA%\treelight\`

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "treelight";

/// Base config directory
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/treelight`
///   - Else: `~/.config/treelight`
///
/// Windows:
///   - `%APPDATA%\treelight`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/treelight/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/treelight/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create `path` and its parents if missing, returning it
pub fn ensure_dir(path: &Path) -> Result<PathBuf, String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))?;
    Ok(path.to_path_buf())
}
