//! simio - output path configuration for simulation engines.
//!
//! This crate holds the directory, file name prefix and overwrite policy
//! that recording devices consult when they open output files, and exposes
//! them through the status-dictionary protocol shared by engine managers.
//!
//! ```
//! use simio::{IoManager, Manager, StatusDict};
//!
//! let mut io = IoManager::new();
//! let mut update = StatusDict::new();
//! update.insert("data_path", "/tmp/out");
//! update.insert("overwrite_files", true);
//! io.set_status(&update)?;
//!
//! assert_eq!(io.data_path(), "/tmp/out");
//! assert!(io.overwrite_files());
//! # Ok::<(), simio::Error>(())
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod manager;
pub mod status;

pub use error::{Error, Result};
pub use io::{IoManager, IoSettings, IoUpdate, SharedIoManager};
pub use manager::Manager;
pub use status::{StatusDict, StatusValue};

/// Build the output manager for an engine process.
///
/// Reads the platform settings file, if any, then applies the environment
/// overrides. See [`bootstrap_from`].
pub fn bootstrap() -> Result<SharedIoManager> {
    bootstrap_with(config::load_default_settings()?)
}

/// Build the output manager from a specific settings file.
///
/// Starts from defaults, then applies the file's `[io]` table and finally the
/// environment overrides, each through `set_status`. A missing file counts
/// as empty.
pub fn bootstrap_from(settings: &std::path::Path) -> Result<SharedIoManager> {
    bootstrap_with(config::load_settings_file(settings)?)
}

fn bootstrap_with(settings: StatusDict) -> Result<SharedIoManager> {
    let mut io = IoManager::new();
    io.set_status(&settings)?;
    io.set_status(&config::env_overrides())?;
    Ok(SharedIoManager::new(io))
}

/// Install a `tracing` subscriber for host binaries and tests.
///
/// `RUST_LOG` takes precedence over the verbosity flags. Returns `false` if a
/// global subscriber was already installed.
pub fn init_logging(verbose: u8, quiet: bool) -> bool {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt().with_env_filter(filter).try_init().is_ok()
}
