//! Error types for the csvschema library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for csvschema operations.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A type expression names a type with no registered converter.
    #[error("Unsupported type '{name}' in schema")]
    UnsupportedType { name: String },

    /// A value could not be cast to a numeric target type.
    #[error("Unable to cast value '{value}' to type {target}")]
    Cast { value: String, target: String },

    /// A parameterized type was used without its parameter.
    #[error("Type '{type_name}' requires a parameter (e.g. '{type_name}:<param>')")]
    MissingParameter { type_name: String },

    /// A custom converter rejected its input.
    #[error("Conversion to '{type_name}' failed: {message}")]
    Conversion { type_name: String, message: String },

    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Input could not be decoded with the configured encoding.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SchemaError {
    /// Build a `Conversion` error for a custom converter.
    pub fn conversion(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        SchemaError::Conversion {
            type_name: type_name.into(),
            message: message.into(),
        }
    }

    /// Returns true for errors raised while coercing a field value,
    /// as opposed to I/O, decoding or configuration failures.
    pub fn is_coercion(&self) -> bool {
        matches!(
            self,
            SchemaError::UnsupportedType { .. }
                | SchemaError::Cast { .. }
                | SchemaError::MissingParameter { .. }
                | SchemaError::Conversion { .. }
        )
    }
}

/// Result type alias for csvschema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;
