//! Example payloads for rendered request bodies
//!
//! Copyright (c) 2025 Apiref Team
//! Licensed under the Apache-2.0 license

use apiref_core::{FieldSchema, RequestBody};
use serde_json::Value;

/// Get the example payload supplied by the document, if any
///
/// The media-type example wins over the schema-level one, and the schema
/// itself wins over its resolved `allOf` variant.
pub fn example_payload(request_body: &RequestBody) -> Option<&Value> {
    let media = request_body.json_media_type()?;
    if let Some(example) = &media.example {
        return Some(example);
    }

    let schema = media.schema.as_ref()?;
    if let Some(example) = &schema.example {
        return Some(example);
    }

    schema.resolve().effective().example.as_ref()
}

/// Build an example payload from the projected fields
///
/// Field-level examples win; otherwise values are derived from the stated
/// type and format. Read-only fields are left out because a request never
/// carries them. A body without fields synthesizes an empty object.
pub fn synthesize_example(request_body: &RequestBody) -> Value {
    let mut example = serde_json::Map::new();

    if let Some(schema) = request_body.json_schema() {
        if let Some(properties) = &schema.resolve().effective().properties {
            for (name, field) in properties {
                if field.read_only {
                    continue;
                }
                example.insert(name.clone(), field_example(name, field));
            }
        }
    }

    Value::Object(example)
}

/// Derive an example value for a single field
fn field_example(name: &str, field: &FieldSchema) -> Value {
    if let Some(example) = &field.example {
        return example.clone();
    }

    match field.schema_type.as_deref() {
        Some("string") => match field.format.as_deref() {
            Some("email") => Value::String("user@example.com".to_string()),
            Some("uri") => Value::String("https://example.com".to_string()),
            Some("date") => Value::String("2025-01-31".to_string()),
            Some("date-time") => Value::String("2025-01-31T12:00:00Z".to_string()),
            Some("uuid") => Value::String("550e8400-e29b-41d4-a716-446655440000".to_string()),
            _ => Value::String(format!("example_{}", name)),
        },
        Some("integer") | Some("number") => Value::Number(serde_json::Number::from(0)),
        Some("boolean") => Value::Bool(false),
        Some("array") => Value::Array(Vec::new()),
        _ => Value::Object(serde_json::Map::new()),
    }
}
