//! Environment variable overrides.

use crate::constants::{env, keys};
use crate::status::StatusDict;

/// Collect output settings supplied through the environment.
///
/// `SIMIO_DATA_PATH` maps to `data_path` and `SIMIO_DATA_PREFIX` to
/// `data_prefix`. Unset or non-UTF-8 variables are skipped. Values are not
/// validated here; pass the result to `set_status`.
pub fn env_overrides() -> StatusDict {
    overrides_from(|name| std::env::var(name).ok())
}

fn overrides_from(lookup: impl Fn(&str) -> Option<String>) -> StatusDict {
    let mut dict = StatusDict::new();
    for (var, key) in [
        (env::DATA_PATH, keys::DATA_PATH),
        (env::DATA_PREFIX, keys::DATA_PREFIX),
    ] {
        if let Some(value) = lookup(var) {
            dict.insert(key, value);
        }
    }
    dict
}
