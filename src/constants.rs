//! Crate-wide constants.
//!
//! Status keys, environment variable names and file names live here so that
//! every component spells them the same way.

/// Application name used for the settings directory and log targets.
pub const APP_NAME: &str = "simio";

/// Name of the settings file inside the settings directory.
pub const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Table in the settings file that holds the output configuration.
pub const SETTINGS_IO_TABLE: &str = "io";

/// Status dictionary keys understood by the output configuration.
pub mod keys {
    /// Directory under which dependent writers create their files.
    pub const DATA_PATH: &str = "data_path";
    /// Prefix prepended to every file name written by dependent writers.
    pub const DATA_PREFIX: &str = "data_prefix";
    /// Whether dependent writers may replace existing files.
    pub const OVERWRITE_FILES: &str = "overwrite_files";

    /// Type name a recognized key requires, `None` for keys nobody reads.
    pub fn expected_type(key: &str) -> Option<&'static str> {
        match key {
            DATA_PATH | DATA_PREFIX => Some("string"),
            OVERWRITE_FILES => Some("bool"),
            _ => None,
        }
    }
}

/// Environment variables the host engine may apply at startup.
pub mod env {
    /// Overrides the output directory.
    pub const DATA_PATH: &str = "SIMIO_DATA_PATH";
    /// Overrides the file name prefix.
    pub const DATA_PREFIX: &str = "SIMIO_DATA_PREFIX";
}
