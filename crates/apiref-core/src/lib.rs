//! Apiref Core - request-body field projection for API reference docs
//!
//! This crate turns an OpenAPI 3.x `requestBody` object, restricted to the
//! `application/json` media type, into the ordered field table that API
//! reference documentation displays.
//!
//! ## Features
//!
//! - **Typed Document Model**: `RequestBody`, `SchemaObject`, and
//!   `FieldSchema` as explicit records, built from JSON or YAML
//! - **Composition Resolution**: the schema itself vs its first `allOf`
//!   variant as an explicit, auditable branch
//! - **Field Projection**: name, required flag, read-only flag, type,
//!   format, and max length per property, in document order
//! - **Degraded Inputs**: schemas without `properties` project to zero rows
//!   instead of failing
//!
//! ## Quick Start
//!
//! ```rust
//! use apiref_core::{project, RequestBody};
//! use serde_json::json;
//!
//! let body = RequestBody::from_value(json!({
//!     "content": {
//!         "application/json": {
//!             "schema": {
//!                 "required": ["ID"],
//!                 "properties": {
//!                     "ID": {"type": "string", "readOnly": true},
//!                     "Name": {"type": "string", "maxLength": 100}
//!                 }
//!             }
//!         }
//!     }
//! })).unwrap();
//!
//! let table = project(Some(&body)).expect("a body was supplied");
//! assert_eq!(table.len(), 2);
//! assert!(table.rows[0].required);
//! assert!(table.rows[0].read_only);
//! assert_eq!(table.rows[1].max_length, Some(100));
//! ```
//!
//! ## Resolution Rules
//!
//! - `properties` come from the first `allOf` variant when one exists,
//!   otherwise from the content schema itself
//! - `required` membership always comes from the content schema itself
//! - A `type` of nothing displays as `object`; a `maxLength` of zero
//!   displays as no constraint
//! - Projection is pure: the same document always yields the same rows
//!
//! Copyright (c) 2025 Apiref Team
//! Licensed under the Apache-2.0 license

pub mod error;
pub mod model;
pub mod projection;

// Re-export commonly used types for convenience
pub use error::{SchemaError, SchemaResult};
pub use model::{FieldSchema, MediaTypeObject, RequestBody, SchemaObject, MEDIA_TYPE_JSON};
pub use projection::{project, FieldRow, FieldTable, ResolvedSchema};
