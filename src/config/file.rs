//! Settings file loading.
//!
//! The file is TOML with an `[io]` table:
//!
//! ```toml
//! [io]
//! data_path = "/scratch/run"
//! data_prefix = "exp1_"
//! overwrite_files = true
//! ```
//!
//! The table is returned as a [`StatusDict`] so that it goes through the
//! same validation as any other `set_status` call. Arrays, tables and
//! datetimes under keys this crate does not read are skipped, so settings
//! written for newer versions still load.

use crate::error::{Error, Result};
use crate::status::{StatusDict, StatusValue, skip_non_scalar};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SettingsFile {
    io: toml::Table,
}

fn status_from_table(table: toml::Table) -> Result<StatusDict> {
    let mut dict = StatusDict::new();
    for (key, value) in table {
        let value = match value {
            toml::Value::Boolean(b) => StatusValue::Bool(b),
            toml::Value::Integer(i) => StatusValue::Int(i),
            toml::Value::Float(f) => StatusValue::Double(f),
            toml::Value::String(s) => StatusValue::String(s),
            toml::Value::Datetime(_) => {
                skip_non_scalar(&key, "datetime")?;
                continue;
            }
            toml::Value::Array(_) => {
                skip_non_scalar(&key, "array")?;
                continue;
            }
            toml::Value::Table(_) => {
                skip_non_scalar(&key, "table")?;
                continue;
            }
        };
        dict.insert(key, value);
    }
    Ok(dict)
}

/// Load the `[io]` table of a settings file.
///
/// Returns an empty dictionary if the file does not exist.
pub fn load_settings_file(path: &Path) -> Result<StatusDict> {
    if !path.exists() {
        return Ok(StatusDict::new());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| Error::SettingsRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let file: SettingsFile = toml::from_str(&contents).map_err(|e| Error::SettingsParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    status_from_table(file.io)
}

/// Load settings from the default platform-specific path.
///
/// Returns an empty dictionary if no settings file exists.
pub fn load_default_settings() -> Result<StatusDict> {
    super::settings_file_path()
        .map_or_else(|_| Ok(StatusDict::new()), |path| load_settings_file(&path))
}
