//! Loading output settings from files and the environment.

mod env;
mod file;
mod paths;

pub use env::env_overrides;
pub use file::{load_default_settings, load_settings_file};
pub use paths::{settings_dir, settings_file_path};
