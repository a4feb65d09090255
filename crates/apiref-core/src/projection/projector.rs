//! Projection of content-schema properties into display rows
//!
//! Copyright (c) 2025 Apiref Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};

use crate::model::{FieldSchema, RequestBody, MEDIA_TYPE_JSON};

/// Type shown for fields that do not state one
const DEFAULT_TYPE: &str = "object";

/// One display row of the request-body field table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldRow {
    /// Property key within the schema's `properties` mapping
    pub name: String,

    /// Membership in the content schema's `required` list
    pub required: bool,

    /// The field's `readOnly` flag
    pub read_only: bool,

    /// The field's `type`, or `object` when it states none
    #[serde(rename = "type")]
    pub type_name: String,

    /// The field's `format`; renderers show a placeholder when absent
    pub format: Option<String>,

    /// The field's `maxLength`; zero counts as absent
    pub max_length: Option<u64>,
}

impl FieldRow {
    /// Build a row from one property entry
    pub fn from_schema(name: &str, field: &FieldSchema, required: bool) -> Self {
        Self {
            name: name.to_string(),
            required,
            read_only: field.read_only,
            type_name: field
                .schema_type
                .clone()
                .unwrap_or_else(|| DEFAULT_TYPE.to_string()),
            format: field.format.clone(),
            // A maxLength of zero carries no display value
            max_length: field.max_length.filter(|length| *length != 0),
        }
    }
}

/// Ordered projection of a content schema's properties
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldTable {
    /// Rows in property document order
    pub rows: Vec<FieldRow>,
}

impl FieldTable {
    /// Check whether the projection produced any rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get the number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Iterate rows in document order
    pub fn iter(&self) -> std::slice::Iter<'_, FieldRow> {
        self.rows.iter()
    }
}

impl RequestBody {
    /// Project the JSON content schema into a field table
    ///
    /// `required` membership is evaluated against the content schema itself,
    /// not against the resolved `allOf` variant. A body without a JSON media
    /// type, without a schema, or without a `properties` mapping projects to
    /// zero rows rather than failing.
    pub fn project(&self) -> FieldTable {
        let schema = match self.json_schema() {
            Some(schema) => schema,
            None => {
                log::warn!(
                    "request body has no {} schema; projecting zero rows",
                    MEDIA_TYPE_JSON
                );
                return FieldTable::default();
            }
        };

        let required = schema.required.as_deref().unwrap_or_default();
        let resolved = schema.resolve();

        let properties = match &resolved.effective().properties {
            Some(properties) => properties,
            None => {
                log::warn!("content schema has no properties; projecting zero rows");
                return FieldTable::default();
            }
        };

        let rows = properties
            .iter()
            .map(|(name, field)| {
                let is_required = required.iter().any(|entry| entry == name);
                FieldRow::from_schema(name, field, is_required)
            })
            .collect();

        FieldTable { rows }
    }
}
