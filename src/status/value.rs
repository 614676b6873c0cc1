//! Scalar values carried by a status dictionary.

use serde::{Deserialize, Serialize};

/// A single value in a status dictionary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatusValue {
    /// Boolean flag.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Floating point number.
    Double(f64),
    /// Text, including paths.
    String(String),
}

impl StatusValue {
    /// Name of the variant, as used in type mismatch errors.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Double(_) => "double",
            Self::String(_) => "string",
        }
    }

    /// The boolean payload, if this is a `Bool`.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The text payload, if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for StatusValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Double(d) => write!(f, "{d}"),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<bool> for StatusValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for StatusValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for StatusValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<&str> for StatusValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for StatusValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
