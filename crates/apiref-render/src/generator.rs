//! Markdown section generator for request bodies
//!
//! Copyright (c) 2025 Apiref Team
//! Licensed under the Apache-2.0 license

use apiref_core::RequestBody;

use crate::example;
use crate::templates::{Template, PLACEHOLDER};

/// Section generator configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Section heading text
    pub heading: String,
    /// Include the body's description paragraph when present
    pub include_description: bool,
    /// Include an example payload block
    pub include_example: bool,
    /// Synthesize an example when the document supplies none
    pub synthesize_example: bool,
    /// Placeholder for absent format and max-length cells
    pub placeholder: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            heading: "Request Body".to_string(),
            include_description: true,
            include_example: true,
            synthesize_example: true,
            placeholder: PLACEHOLDER.to_string(),
        }
    }
}

impl RenderConfig {
    /// Set the section heading text
    pub fn with_heading<S: Into<String>>(mut self, heading: S) -> Self {
        self.heading = heading.into();
        self
    }

    /// Set the placeholder for absent format and max-length cells
    pub fn with_placeholder<S: Into<String>>(mut self, placeholder: S) -> Self {
        self.placeholder = placeholder.into();
        self
    }
}

/// Renders a request body as a markdown reference section
pub struct DocGenerator {
    config: RenderConfig,
}

impl DocGenerator {
    /// Create a generator with default configuration
    pub fn new() -> Self {
        Self::with_config(RenderConfig::default())
    }

    /// Create a generator with custom configuration
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render the section, or `None` when there is no body to display
    ///
    /// An operation without a request body produces no section at all; a
    /// degraded body produces the heading with an empty table.
    pub fn render(&self, request_body: Option<&RequestBody>) -> Option<String> {
        let body = request_body?;
        let table = body.project();

        let mut doc = Template::heading(&self.config.heading);

        if self.config.include_description {
            if let Some(description) = &body.description {
                doc.push_str(&Template::description(description));
            }
        }

        doc.push_str(&Template::field_table(&table, &self.config.placeholder));

        if self.config.include_example {
            // Use the provided example if available
            if let Some(supplied) = example::example_payload(body) {
                doc.push_str(&Template::example_block(supplied));
            } else if self.config.synthesize_example {
                let synthesized = example::synthesize_example(body);
                doc.push_str(&Template::example_block(&synthesized));
            }
        }

        Some(doc)
    }

    /// Get the current configuration
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Update configuration
    pub fn set_config(&mut self, config: RenderConfig) {
        self.config = config;
    }
}

impl Default for DocGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: serde_json::Value) -> RequestBody {
        RequestBody::from_value(value).unwrap()
    }

    #[test]
    fn test_absent_body_renders_no_section() {
        let generator = DocGenerator::new();
        assert!(generator.render(None).is_none());
    }

    #[test]
    fn test_full_section_rendering() {
        let address = body(json!({
            "description": "Address to attach to the order",
            "content": {
                "application/json": {
                    "schema": {
                        "required": ["Street1"],
                        "properties": {
                            "Street1": {"type": "string", "maxLength": 100},
                            "Phone": {"type": "string"}
                        }
                    }
                }
            }
        }));

        let generator = DocGenerator::new();
        let doc = generator.render(Some(&address)).unwrap();

        assert!(doc.starts_with("## Request Body\n"));
        assert!(doc.contains("Address to attach to the order"));
        assert!(doc.contains("`Street1` (required)"));
        assert!(doc.contains("100 characters"));
        assert!(doc.contains("```json"));
        assert!(doc.contains("example_Street1"));
    }

    #[test]
    fn test_degraded_body_still_renders_a_section() {
        let empty = body(json!({"description": "No payload documented"}));

        let generator = DocGenerator::new();
        let doc = generator.render(Some(&empty)).unwrap();

        assert!(doc.contains("## Request Body"));
        assert!(doc.contains("| Property | | Type | Format | Max Length |"));
    }

    #[test]
    fn test_supplied_example_wins_over_synthesis() {
        let with_example = body(json!({
            "content": {
                "application/json": {
                    "example": {"Street1": "123 Elm St"},
                    "schema": {
                        "properties": {"Street1": {"type": "string"}}
                    }
                }
            }
        }));

        let generator = DocGenerator::new();
        let doc = generator.render(Some(&with_example)).unwrap();

        assert!(doc.contains("123 Elm St"));
        assert!(!doc.contains("example_Street1"));
    }

    #[test]
    fn test_config_options() {
        let described = body(json!({
            "description": "Hidden when disabled",
            "content": {
                "application/json": {
                    "schema": {
                        "properties": {"Name": {"type": "string"}}
                    }
                }
            }
        }));

        let mut config = RenderConfig::default().with_heading("Payload");
        config.include_description = false;
        config.include_example = false;

        let generator = DocGenerator::with_config(config);
        let doc = generator.render(Some(&described)).unwrap();

        assert!(doc.starts_with("## Payload\n"));
        assert!(!doc.contains("Hidden when disabled"));
        assert!(!doc.contains("```json"));
    }

    #[test]
    fn test_synthesis_can_be_disabled_separately() {
        let bare = body(json!({
            "content": {
                "application/json": {
                    "schema": {
                        "properties": {"Name": {"type": "string"}}
                    }
                }
            }
        }));

        let mut config = RenderConfig::default();
        config.synthesize_example = false;

        let generator = DocGenerator::with_config(config);
        let doc = generator.render(Some(&bare)).unwrap();

        // No supplied example and synthesis disabled: no fenced block
        assert!(!doc.contains("```json"));
    }
}
