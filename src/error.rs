//! Error types for simio.

/// Result type alias for simio operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for simio.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A recognized status key carried a value that fails validation.
    #[error("invalid value '{value}' for '{key}': {reason}")]
    InvalidConfigurationValue {
        /// Status key the value was supplied for.
        key: String,
        /// Rejected value.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A writer asked for an output file name that is not a single component.
    #[error("invalid output file name '{name}': {reason}")]
    InvalidFileName {
        /// Rejected file name.
        name: String,
        /// Why the name was rejected.
        reason: String,
    },

    /// A recognized status key carried a value of the wrong type.
    #[error("type mismatch for '{key}': expected {expected}, got {found}")]
    TypeMismatch {
        /// Status key the value was supplied for.
        key: String,
        /// Type the key requires.
        expected: &'static str,
        /// Type that was supplied.
        found: &'static str,
    },

    /// Settings directory could not be determined.
    #[error("could not determine settings directory for this platform")]
    SettingsDirNotFound,

    /// Failed to read settings file.
    #[error("failed to read settings file '{path}'")]
    SettingsRead {
        /// Path to the settings file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse settings file.
    #[error("failed to parse settings file '{path}'")]
    SettingsParse {
        /// Path to the settings file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Failed to encode or decode a status dictionary as JSON.
    #[error("failed to convert status dictionary to or from JSON")]
    StatusJson {
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },

    /// A status document did not have the shape of a flat dictionary.
    #[error("invalid status document: {message}")]
    InvalidStatusDocument {
        /// Description of the shape problem.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_message_names_key_and_value() {
        let err = Error::InvalidConfigurationValue {
            key: "data_prefix".to_string(),
            value: "run1/x".to_string(),
            reason: "must not contain a path separator".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("data_prefix"));
        assert!(msg.contains("run1/x"));
    }

    #[test]
    fn test_type_mismatch_message() {
        let err = Error::TypeMismatch {
            key: "overwrite_files".to_string(),
            expected: "bool",
            found: "string",
        };
        assert_eq!(
            err.to_string(),
            "type mismatch for 'overwrite_files': expected bool, got string"
        );
    }
}
