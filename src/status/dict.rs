//! String-keyed status dictionary.

use crate::constants::keys;
use crate::error::{Error, Result};
use crate::status::StatusValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::trace;

/// Ordered mapping from status keys to scalar values.
///
/// This is the generic exchange format at the manager boundary. Managers
/// convert it into their own typed records immediately on `set_status`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusDict {
    entries: BTreeMap<String, StatusValue>,
}

impl StatusDict {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value, returning the previous one.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<StatusValue>,
    ) -> Option<StatusValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Look up a raw value.
    pub fn get(&self, key: &str) -> Option<&StatusValue> {
        self.entries.get(key)
    }

    /// Whether the key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StatusValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Copy every entry of `other` into `self`; `other` wins on shared keys.
    pub fn merge(&mut self, other: &Self) {
        for (key, value) in &other.entries {
            self.entries.insert(key.clone(), value.clone());
        }
    }

    /// Typed boolean lookup.
    ///
    /// `Ok(None)` if the key is absent, `TypeMismatch` if it holds another type.
    pub fn get_bool(&self, key: &str) -> Result<Option<bool>> {
        self.get(key)
            .map(|value| value.as_bool().ok_or_else(|| mismatch(key, "bool", value)))
            .transpose()
    }

    /// Typed string lookup.
    ///
    /// `Ok(None)` if the key is absent, `TypeMismatch` if it holds another type.
    pub fn get_str(&self, key: &str) -> Result<Option<&str>> {
        self.get(key)
            .map(|value| value.as_str().ok_or_else(|| mismatch(key, "string", value)))
            .transpose()
    }

    /// Parse a JSON object of scalars.
    ///
    /// Nested values under unrecognized keys are skipped; under a recognized
    /// key they are a `TypeMismatch`.
    pub fn from_json(json: &str) -> Result<Self> {
        let document: serde_json::Value =
            serde_json::from_str(json).map_err(|e| Error::StatusJson { source: e })?;

        let serde_json::Value::Object(object) = document else {
            return Err(Error::InvalidStatusDocument {
                message: "top level must be an object".to_string(),
            });
        };

        let mut dict = Self::new();
        for (key, value) in object {
            let value = match value {
                serde_json::Value::Bool(b) => StatusValue::Bool(b),
                serde_json::Value::String(s) => StatusValue::String(s),
                serde_json::Value::Number(n) => n.as_i64().map_or_else(
                    || StatusValue::Double(n.as_f64().unwrap_or_default()),
                    StatusValue::Int,
                ),
                serde_json::Value::Null => {
                    skip_non_scalar(&key, "null")?;
                    continue;
                }
                serde_json::Value::Array(_) => {
                    skip_non_scalar(&key, "array")?;
                    continue;
                }
                serde_json::Value::Object(_) => {
                    skip_non_scalar(&key, "object")?;
                    continue;
                }
            };
            dict.entries.insert(key, value);
        }

        Ok(dict)
    }

    /// Encode as a JSON object.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::StatusJson { source: e })
    }
}

impl<K, V> FromIterator<(K, V)> for StatusDict
where
    K: Into<String>,
    V: Into<StatusValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Drop a value that cannot be held in a status dictionary.
///
/// Only keys nobody reads may be dropped; a recognized key with such a value
/// is a `TypeMismatch`.
pub(crate) fn skip_non_scalar(key: &str, found: &'static str) -> Result<()> {
    if let Some(expected) = keys::expected_type(key) {
        return Err(Error::TypeMismatch {
            key: key.to_string(),
            expected,
            found,
        });
    }
    trace!(key, found, "Skipping non-scalar value under unrecognized key");
    Ok(())
}

fn mismatch(key: &str, expected: &'static str, found: &StatusValue) -> Error {
    Error::TypeMismatch {
        key: key.to_string(),
        expected,
        found: found.type_name(),
    }
}
