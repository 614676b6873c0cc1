//! Status dictionaries exchanged across manager boundaries.

mod dict;
mod value;

pub use dict::StatusDict;
pub(crate) use dict::skip_non_scalar;
pub use value::StatusValue;
