//! Field projection over a request body's JSON content schema
//!
//! This module turns the typed request-body model into the ordered row
//! records that reference documentation renders, resolving `allOf`
//! composition along the way.
//!
//! Copyright (c) 2025 Apiref Team
//! Licensed under the Apache-2.0 license

pub mod projector;
pub mod resolver;

pub use projector::{FieldRow, FieldTable};
pub use resolver::ResolvedSchema;

use crate::model::RequestBody;

/// Project an optional request body into a field table
///
/// Operations without a body pass `None` and get `None` back, so callers can
/// skip the section entirely instead of rendering an empty table.
///
/// # Examples
///
/// ```rust
/// use apiref_core::{project, RequestBody};
/// use serde_json::json;
///
/// assert!(project(None).is_none());
///
/// let body = RequestBody::from_value(json!({
///     "content": {"application/json": {"schema": {
///         "properties": {"Active": {"type": "boolean"}}
///     }}}
/// })).unwrap();
///
/// let table = project(Some(&body)).unwrap();
/// assert_eq!(table.rows[0].name, "Active");
/// assert_eq!(table.rows[0].type_name, "boolean");
/// ```
pub fn project(request_body: Option<&RequestBody>) -> Option<FieldTable> {
    request_body.map(RequestBody::project)
}
