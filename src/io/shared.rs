//! Thread-safe handle for sharing one [`IoManager`] across an engine.

use crate::error::Result;
use crate::io::manager::IoManager;
use crate::io::settings::IoSettings;
use crate::manager::Manager;
use crate::status::StatusDict;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Cloneable handle enforcing single-writer/multiple-reader access.
///
/// Setup code mutates through `init`, `reset` and `set_status`; writers
/// running in parallel read through [`SharedIoManager::read`] or
/// [`SharedIoManager::snapshot`]. Updates are validated before they touch
/// state, so a poisoned lock still guards consistent settings and is
/// recovered rather than propagated.
#[derive(Debug, Clone, Default)]
pub struct SharedIoManager {
    inner: Arc<RwLock<IoManager>>,
}

impl SharedIoManager {
    /// Wrap a manager.
    pub fn new(manager: IoManager) -> Self {
        Self {
            inner: Arc::new(RwLock::new(manager)),
        }
    }

    /// Shared read access to the manager and its accessors.
    pub fn read(&self) -> RwLockReadGuard<'_, IoManager> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, IoManager> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Owned copy of the current settings.
    pub fn snapshot(&self) -> IoSettings {
        self.read().settings().clone()
    }
}

impl Manager for SharedIoManager {
    fn name(&self) -> &'static str {
        "io"
    }

    fn init(&mut self) {
        self.write().init();
    }

    fn reset(&mut self) {
        self.write().reset();
    }

    fn set_status(&mut self, update: &StatusDict) -> Result<()> {
        self.write().set_status(update)
    }

    fn get_status(&self, output: &mut StatusDict) {
        self.read().get_status(output);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::constants::keys;

    #[test]
    fn test_clones_share_state() {
        let mut writer = SharedIoManager::default();
        let reader = writer.clone();

        let mut update = StatusDict::new();
        update.insert(keys::DATA_PATH, "/scratch");
        writer.set_status(&update).unwrap();

        assert_eq!(reader.read().data_path(), "/scratch");
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut shared = SharedIoManager::default();
        let before = shared.snapshot();

        let mut update = StatusDict::new();
        update.insert(keys::OVERWRITE_FILES, true);
        shared.set_status(&update).unwrap();

        assert!(!before.overwrite_files);
        assert!(shared.snapshot().overwrite_files);
    }
}
