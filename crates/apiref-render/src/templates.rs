//! Markdown templates for the request-body section
//!
//! Copyright (c) 2025 Apiref Team
//! Licensed under the Apache-2.0 license

use apiref_core::{FieldRow, FieldTable};
use serde_json::Value;

/// Placeholder shown for absent format and max-length values
pub const PLACEHOLDER: &str = "---";

/// Template for generating the markdown request-body section
pub struct Template;

impl Template {
    /// Generate the section heading
    pub fn heading(title: &str) -> String {
        format!("## {}\n\n", title)
    }

    /// Generate the description paragraph
    pub fn description(text: &str) -> String {
        format!("{}\n\n", text)
    }

    /// Generate the property table
    ///
    /// The unlabeled second column carries the read-only marker.
    pub fn field_table(table: &FieldTable, placeholder: &str) -> String {
        let mut result = String::from("| Property | | Type | Format | Max Length |\n");
        result.push_str("| --- | --- | --- | --- | --- |\n");

        for row in table.iter() {
            result.push_str(&Self::field_row(row, placeholder));
        }

        result.push('\n');
        result
    }

    /// Generate one table row
    pub fn field_row(row: &FieldRow, placeholder: &str) -> String {
        let name = if row.required {
            format!("`{}` (required)", row.name)
        } else {
            format!("`{}`", row.name)
        };

        let marker = if row.read_only { "read-only" } else { "" };
        let format = row.format.as_deref().unwrap_or(placeholder);
        let max_length = match row.max_length {
            Some(length) => format!("{} characters", length),
            None => placeholder.to_string(),
        };

        format!(
            "| {} | {} | `{}` | {} | {} |\n",
            name, marker, row.type_name, format, max_length
        )
    }

    /// Generate the fenced example block
    pub fn example_block(example: &Value) -> String {
        let mut result = String::from("```json\n");
        result.push_str(&serde_json::to_string_pretty(example).unwrap_or_else(|_| "null".to_string()));
        result.push_str("\n```\n\n");
        result
    }
}
