//! Output directory, file name prefix and overwrite policy.

mod manager;
mod settings;
mod shared;

pub use manager::IoManager;
pub use settings::{IoSettings, IoUpdate, validate_prefix};
pub use shared::SharedIoManager;
