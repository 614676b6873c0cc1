//! Manager capability shared by stateful engine subsystems.

use crate::error::Result;
use crate::status::StatusDict;

/// Trait for subsystems configured and cycled through status dictionaries.
pub trait Manager {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Establish default state.
    fn init(&mut self);

    /// Return to default state.
    fn reset(&mut self) {
        self.init();
    }

    /// Apply recognized keys from `update`; unknown keys are ignored.
    fn set_status(&mut self, update: &StatusDict) -> Result<()>;

    /// Merge current values into `output`.
    fn get_status(&self, output: &mut StatusDict);
}
