//! Output path configuration manager.

use crate::constants::keys;
use crate::error::{Error, Result};
use crate::io::settings::{IoSettings, IoUpdate, is_path_separator};
use crate::manager::Manager;
use crate::status::StatusDict;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// Holds where dependent writers put their files, how they name them and
/// whether they may replace existing ones.
///
/// All mutation goes through [`Manager::set_status`], [`IoManager::apply`],
/// `init` or `reset`. A rejected update leaves every field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IoManager {
    settings: IoSettings,
}

impl IoManager {
    /// Create a manager in its default state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory for output files. Empty means the working directory.
    pub fn data_path(&self) -> &str {
        &self.settings.data_path
    }

    /// Prefix for output file names.
    pub fn data_prefix(&self) -> &str {
        &self.settings.data_prefix
    }

    /// Whether dependent writers may overwrite existing files.
    pub fn overwrite_files(&self) -> bool {
        self.settings.overwrite_files
    }

    /// Read-only view of all settings.
    pub fn settings(&self) -> &IoSettings {
        &self.settings
    }

    /// Validate and apply a typed update.
    ///
    /// Either every field in `update` is applied or, on error, none is.
    pub fn apply(&mut self, update: IoUpdate) -> Result<()> {
        if let Err(e) = update.validate() {
            warn!("Rejected output settings update: {e}");
            return Err(e);
        }
        if update.is_empty() {
            return Ok(());
        }
        self.settings.apply_validated(update);
        debug!(
            data_path = %self.settings.data_path,
            data_prefix = %self.settings.data_prefix,
            overwrite_files = self.settings.overwrite_files,
            "Output settings updated"
        );
        Ok(())
    }

    /// Path a dependent writer should use for `label` with `extension`.
    ///
    /// Yields `<data_path>/<data_prefix><label><extension>`, or a bare
    /// relative file name when `data_path` is empty. The composed name must
    /// be a single path component, so `label` and `extension` may not
    /// contain separators and the name may not be `.` or `..`.
    pub fn output_path(&self, label: &str, extension: &str) -> Result<PathBuf> {
        let file_name = format!("{}{label}{extension}", self.settings.data_prefix);

        let reason = if file_name.chars().any(is_path_separator) {
            Some("label and extension must not contain a path separator")
        } else if file_name.is_empty() || file_name == "." || file_name == ".." {
            Some("file name must not be empty, '.' or '..'")
        } else {
            None
        };
        if let Some(reason) = reason {
            warn!("Rejected output file name '{file_name}': {reason}");
            return Err(Error::InvalidFileName {
                name: file_name,
                reason: reason.to_string(),
            });
        }

        Ok(if self.settings.data_path.is_empty() {
            PathBuf::from(file_name)
        } else {
            Path::new(&self.settings.data_path).join(file_name)
        })
    }
}

impl Manager for IoManager {
    fn name(&self) -> &'static str {
        "io"
    }

    fn init(&mut self) {
        self.settings = IoSettings::default();
        debug!("Output settings initialized to defaults");
    }

    fn set_status(&mut self, update: &StatusDict) -> Result<()> {
        for (key, _) in update.iter() {
            if keys::expected_type(key).is_none() {
                trace!(key, "Ignoring unrecognized status key");
            }
        }

        let typed = match IoUpdate::from_status(update) {
            Ok(typed) => typed,
            Err(e) => {
                warn!("Rejected output settings update: {e}");
                return Err(e);
            }
        };
        self.apply(typed)
    }

    fn get_status(&self, output: &mut StatusDict) {
        self.settings.write_status(output);
    }
}
