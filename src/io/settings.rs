//! Typed output settings and updates.

use crate::constants::keys;
use crate::error::{Error, Result};
use crate::status::StatusDict;

/// Current output configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IoSettings {
    /// Directory for output files. Empty means the working directory.
    pub data_path: String,

    /// Prefix for output file names. Never contains a path separator.
    pub data_prefix: String,

    /// Whether existing output files may be replaced.
    pub overwrite_files: bool,
}

impl IoSettings {
    /// Write all three keys into `output`, keeping unrelated entries.
    pub fn write_status(&self, output: &mut StatusDict) {
        output.insert(keys::DATA_PATH, self.data_path.as_str());
        output.insert(keys::DATA_PREFIX, self.data_prefix.as_str());
        output.insert(keys::OVERWRITE_FILES, self.overwrite_files);
    }

    /// Apply an update that has already passed validation.
    pub(crate) fn apply_validated(&mut self, update: IoUpdate) {
        if let Some(path) = update.data_path {
            self.data_path = path;
        }
        if let Some(prefix) = update.data_prefix {
            self.data_prefix = prefix;
        }
        if let Some(overwrite) = update.overwrite_files {
            self.overwrite_files = overwrite;
        }
    }
}

/// A partial change to [`IoSettings`]. Absent fields stay as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IoUpdate {
    /// New output directory, applied verbatim.
    pub data_path: Option<String>,
    /// New file name prefix.
    pub data_prefix: Option<String>,
    /// New overwrite policy.
    pub overwrite_files: Option<bool>,
}

impl IoUpdate {
    /// Extract the recognized keys of a status dictionary.
    ///
    /// Only types are checked here; values are checked by [`IoUpdate::validate`].
    pub fn from_status(dict: &StatusDict) -> Result<Self> {
        Ok(Self {
            data_path: dict.get_str(keys::DATA_PATH)?.map(str::to_string),
            data_prefix: dict.get_str(keys::DATA_PREFIX)?.map(str::to_string),
            overwrite_files: dict.get_bool(keys::OVERWRITE_FILES)?,
        })
    }

    /// Check every present field.
    pub fn validate(&self) -> Result<()> {
        if let Some(prefix) = &self.data_prefix {
            validate_prefix(prefix)?;
        }
        Ok(())
    }

    /// Whether the update changes nothing.
    pub const fn is_empty(&self) -> bool {
        self.data_path.is_none() && self.data_prefix.is_none() && self.overwrite_files.is_none()
    }
}

/// Whether `c` separates path components on any platform we write to.
pub(crate) fn is_path_separator(c: char) -> bool {
    c == '/' || std::path::is_separator(c)
}

/// Reject prefixes that would move output out of the data directory.
pub fn validate_prefix(prefix: &str) -> Result<()> {
    if prefix.chars().any(is_path_separator) {
        return Err(Error::InvalidConfigurationValue {
            key: keys::DATA_PREFIX.to_string(),
            value: prefix.to_string(),
            reason: "prefix must not contain a path separator".to_string(),
        });
    }
    Ok(())
}
