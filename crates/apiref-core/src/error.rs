//! Error types for request-body document construction
//!
//! Copyright (c) 2025 Apiref Team
//! Licensed under the Apache-2.0 license

use thiserror::Error;

/// Result type for document construction
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised while building the typed request-body model
#[derive(Error, Debug)]
pub enum SchemaError {
    /// JSON that does not deserialize into the document model
    #[error("Failed to parse JSON request body: {source}")]
    JsonParseError { source: serde_json::Error },

    /// YAML that does not deserialize into the document model
    #[error("Failed to parse YAML request body: {source}")]
    YamlParseError { source: serde_yaml::Error },
}

impl SchemaError {
    /// Create a JSON parsing error
    pub fn json_parse_error(error: serde_json::Error) -> Self {
        Self::JsonParseError { source: error }
    }

    /// Create a YAML parsing error
    pub fn yaml_parse_error(error: serde_yaml::Error) -> Self {
        Self::YamlParseError { source: error }
    }
}
