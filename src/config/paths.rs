//! Platform-specific settings paths.

use crate::constants::{APP_NAME, SETTINGS_FILE_NAME};
use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

/// Get the settings directory for the current platform.
///
/// - Linux: `~/.config/simio/`
/// - macOS: `~/Library/Application Support/simio/`
/// - Windows: `%APPDATA%\simio\`
pub fn settings_dir() -> Result<PathBuf> {
    ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or(Error::SettingsDirNotFound)
}

/// Get the full path to the settings file.
pub fn settings_file_path() -> Result<PathBuf> {
    Ok(settings_dir()?.join(SETTINGS_FILE_NAME))
}
