//! Typed model of an OpenAPI request body restricted to JSON content
//!
//! The model is an explicit record over the wire format rather than an open
//! map: unknown keys are ignored on deserialization, absent keys take the
//! documented defaults, and `properties` keeps document order.
//!
//! Copyright (c) 2025 Apiref Team
//! Licensed under the Apache-2.0 license

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{SchemaError, SchemaResult};

/// The only media type the projection consults
pub const MEDIA_TYPE_JSON: &str = "application/json";

/// An OpenAPI 3.x `requestBody` object
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestBody {
    /// Prose shown above the field table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the operation requires a body at all
    #[serde(default)]
    pub required: bool,

    /// Media-type objects keyed by media type, in document order
    #[serde(default)]
    pub content: IndexMap<String, MediaTypeObject>,
}

impl RequestBody {
    /// Build a request body from an already parsed JSON value
    pub fn from_value(value: Value) -> SchemaResult<Self> {
        serde_json::from_value(value).map_err(SchemaError::json_parse_error)
    }

    /// Parse a request body from JSON text
    pub fn from_json_str(content: &str) -> SchemaResult<Self> {
        serde_json::from_str(content).map_err(SchemaError::json_parse_error)
    }

    /// Parse a request body from YAML text
    pub fn from_yaml_str(content: &str) -> SchemaResult<Self> {
        // First parse as YAML Value to catch YAML-specific errors
        let yaml_value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(SchemaError::yaml_parse_error)?;

        // Convert to JSON Value for consistent handling
        let value = serde_json::to_value(yaml_value).map_err(SchemaError::json_parse_error)?;
        Self::from_value(value)
    }

    /// Get the `application/json` media-type entry, if the document has one
    pub fn json_media_type(&self) -> Option<&MediaTypeObject> {
        self.content.get(MEDIA_TYPE_JSON)
    }

    /// Get the content schema for the JSON media type
    pub fn json_schema(&self) -> Option<&SchemaObject> {
        self.json_media_type().and_then(|media| media.schema.as_ref())
    }
}

/// A single media-type object under `content`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaTypeObject {
    /// Schema describing the payload for this media type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaObject>,

    /// Example payload supplied alongside the schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
}

/// A schema object as it appears under a media type
///
/// `properties` may live on the schema itself or on the first `allOf`
/// variant; `required` always lives on the schema itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaObject {
    /// Names of required properties, in document order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,

    /// Named fields, in document order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, FieldSchema>>,

    /// Composition variants; only the first is consulted
    #[serde(rename = "allOf", skip_serializing_if = "Option::is_none")]
    pub all_of: Option<Vec<SchemaObject>>,

    /// Example payload supplied on the schema itself
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
}

/// One named property within a schema's `properties` mapping
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldSchema {
    /// Wire `type`; absent means the field is an object
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,

    /// Wire `format` qualifier such as `date-time` or `uuid`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Maximum string length constraint
    #[serde(rename = "maxLength", skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,

    /// Whether the field is returned by the API but never accepted
    #[serde(rename = "readOnly", default)]
    pub read_only: bool,

    /// Example value for this field alone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
}
