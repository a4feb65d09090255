//! Composition resolution for content schemas
//!
//! A content schema either carries its own `properties` or composes variants
//! under `allOf`. Only the first variant is ever consulted; the branch lives
//! here so the choice stays auditable.
//!
//! Copyright (c) 2025 Apiref Team
//! Licensed under the Apache-2.0 license

use crate::model::SchemaObject;

/// The schema chosen to supply `properties` for projection
#[derive(Debug, Clone, Copy)]
pub enum ResolvedSchema<'a> {
    /// Properties are read off the schema itself
    Direct(&'a SchemaObject),
    /// Properties are read off the first `allOf` variant
    Composed(&'a SchemaObject),
}

impl<'a> ResolvedSchema<'a> {
    /// Get the schema whose `properties` feed the projection
    pub fn effective(&self) -> &'a SchemaObject {
        match self {
            ResolvedSchema::Direct(schema) => schema,
            ResolvedSchema::Composed(first_variant) => first_variant,
        }
    }

    /// Check whether the effective schema came from an `allOf` composition
    pub fn is_composed(&self) -> bool {
        matches!(self, ResolvedSchema::Composed(_))
    }
}

impl SchemaObject {
    /// Resolve the schema the projection reads `properties` from
    ///
    /// An `allOf` with at least one variant supplies the first; an absent or
    /// empty `allOf` leaves the schema itself in effect. `required` is not
    /// resolved here because it is always read off the schema itself.
    pub fn resolve(&self) -> ResolvedSchema<'_> {
        match &self.all_of {
            Some(variants) if !variants.is_empty() => {
                if variants.len() > 1 {
                    log::debug!(
                        "allOf carries {} variants; only the first is projected",
                        variants.len()
                    );
                }
                ResolvedSchema::Composed(&variants[0])
            }
            _ => ResolvedSchema::Direct(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema(value: serde_json::Value) -> SchemaObject {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_plain_schema_resolves_to_itself() {
        let plain = schema(json!({
            "properties": {"Name": {"type": "string"}}
        }));

        let resolved = plain.resolve();
        assert!(!resolved.is_composed());
        assert!(resolved.effective().properties.is_some());
    }

    #[test]
    fn test_all_of_resolves_to_first_variant() {
        let composed = schema(json!({
            "allOf": [
                {"properties": {"First": {"type": "string"}}},
                {"properties": {"Second": {"type": "integer"}}}
            ]
        }));

        let resolved = composed.resolve();
        assert!(resolved.is_composed());

        let properties = resolved.effective().properties.as_ref().unwrap();
        assert!(properties.contains_key("First"));
        assert!(!properties.contains_key("Second"));
    }

    #[test]
    fn test_empty_all_of_resolves_to_schema_itself() {
        let degenerate = schema(json!({
            "allOf": [],
            "properties": {"Fallback": {"type": "boolean"}}
        }));

        let resolved = degenerate.resolve();
        assert!(!resolved.is_composed());
        assert!(resolved
            .effective()
            .properties
            .as_ref()
            .unwrap()
            .contains_key("Fallback"));
    }

    #[test]
    fn test_all_of_wins_over_sibling_properties() {
        let both = schema(json!({
            "properties": {"Ignored": {"type": "string"}},
            "allOf": [{"properties": {"Used": {"type": "string"}}}]
        }));

        let resolved = both.resolve();
        assert!(resolved.is_composed());

        let properties = resolved.effective().properties.as_ref().unwrap();
        assert!(properties.contains_key("Used"));
        assert!(!properties.contains_key("Ignored"));
    }

    #[test]
    fn test_required_stays_on_the_unresolved_schema() {
        let composed = schema(json!({
            "required": ["Used"],
            "allOf": [{"properties": {"Used": {"type": "string"}}}]
        }));

        let resolved = composed.resolve();
        assert!(resolved.effective().required.is_none());
        assert!(composed.required.is_some());
    }
}
