// App Paths
// Per-OS application data and log directories

use std::env;
use std::fs;
use std::path::PathBuf;

const APP_DIR_NAME: &str = "FileConverter";

/// Resolve the per-user data directory for this application
///
/// Windows: %LOCALAPPDATA% (falling back to %APPDATA%); macOS:
/// ~/Library/Application Support; elsewhere: $XDG_DATA_HOME or ~/.local/share.
pub fn data_dir() -> Result<PathBuf, String> {
    Ok(base_data_dir()?.join(APP_DIR_NAME))
}

/// Resolve the data directory, creating it if needed
pub fn ensure_data_dir() -> Result<PathBuf, String> {
    let dir = data_dir()?;
    fs::create_dir_all(&dir).map_err(|e| format!("Failed to create data directory: {e}"))?;
    Ok(dir)
}

/// Resolve the log directory under the data directory, creating it if needed
pub fn ensure_log_dir() -> Result<PathBuf, String> {
    let dir = data_dir()?.join("logs");
    fs::create_dir_all(&dir).map_err(|e| format!("Failed to create log directory: {e}"))?;
    Ok(dir)
}

fn base_data_dir() -> Result<PathBuf, String> {
    if cfg!(target_os = "windows") {
        env::var("LOCALAPPDATA")
            .or_else(|_| env::var("APPDATA"))
            .map(PathBuf::from)
            .map_err(|_| "Neither LOCALAPPDATA nor APPDATA is set".to_string())
    } else if cfg!(target_os = "macos") {
        Ok(home_dir()?.join("Library").join("Application Support"))
    } else {
        match env::var("XDG_DATA_HOME") {
            Ok(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
            _ => Ok(home_dir()?.join(".local").join("share")),
        }
    }
}

fn home_dir() -> Result<PathBuf, String> {
    let var = if cfg!(target_os = "windows") {
        "USERPROFILE"
    } else {
        "HOME"
    };
    env::var(var)
        .map(PathBuf::from)
        .map_err(|_| format!("{var} is not set"))
}
