//! Apiref Render - reference-documentation output for projected field tables
//!
//! The sibling crate `apiref-core` projects an OpenAPI request body into an
//! ordered field table; this crate draws that table:
//!
//! - **Markdown**: a request-body section with the property table and a
//!   fenced JSON example payload
//! - **Terminal**: an aligned text table, optionally colored by field type
//! - **Type Styling**: the string/boolean/array/object/integer palette
//! - **Examples**: supplied payloads preferred, synthesized ones as fallback
//!
//! ## Quick Start
//!
//! ```rust
//! use apiref_core::RequestBody;
//! use apiref_render::DocGenerator;
//! use serde_json::json;
//!
//! let body = RequestBody::from_value(json!({
//!     "content": {
//!         "application/json": {
//!             "schema": {
//!                 "required": ["Name"],
//!                 "properties": {
//!                     "Name": {"type": "string", "maxLength": 100}
//!                 }
//!             }
//!         }
//!     }
//! })).unwrap();
//!
//! let markdown = DocGenerator::new().render(Some(&body)).unwrap();
//! assert!(markdown.contains("## Request Body"));
//! assert!(markdown.contains("`Name` (required)"));
//! assert!(markdown.contains("100 characters"));
//! ```
//!
//! Copyright (c) 2025 Apiref Team
//! Licensed under the Apache-2.0 license

pub mod example;
pub mod generator;
pub mod style;
pub mod table;
pub mod templates;

// Re-export commonly used types for convenience
pub use example::{example_payload, synthesize_example};
pub use generator::{DocGenerator, RenderConfig};
pub use style::TypeStyle;
pub use table::TableRenderer;
pub use templates::{Template, PLACEHOLDER};

/// Render a request body straight to markdown with default configuration
pub fn render_markdown(request_body: Option<&apiref_core::RequestBody>) -> Option<String> {
    DocGenerator::new().render(request_body)
}
