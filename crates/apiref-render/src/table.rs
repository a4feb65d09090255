//! Aligned text tables for terminal output
//!
//! Copyright (c) 2025 Apiref Team
//! Licensed under the Apache-2.0 license

use apiref_core::{FieldRow, FieldTable};
use colored::Colorize;

use crate::style::TypeStyle;
use crate::templates::PLACEHOLDER;

/// Renders a projected field table as an aligned text table
///
/// With color disabled the output carries no escape codes at all, so it is
/// safe for piping and for snapshot assertions.
pub struct TableRenderer {
    use_color: bool,
    placeholder: String,
}

impl TableRenderer {
    /// Create a new table renderer
    pub fn new(use_color: bool) -> Self {
        Self {
            use_color,
            placeholder: PLACEHOLDER.to_string(),
        }
    }

    /// Set the placeholder for absent format and max-length cells
    pub fn with_placeholder<S: Into<String>>(mut self, placeholder: S) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Render the table with headers, separator, and one line per row
    pub fn render(&self, table: &FieldTable) -> String {
        let headers = ["Property", "", "Type", "Format", "Max Length"];
        let rows: Vec<[String; 5]> = table.iter().map(|row| self.cells(row)).collect();

        // Calculate column widths
        let mut widths = headers.iter().map(|h| h.len()).collect::<Vec<_>>();
        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.len());
            }
        }

        let mut output = String::new();

        let header_row = headers
            .iter()
            .enumerate()
            .map(|(i, h)| format!("{:width$}", h, width = widths[i]))
            .collect::<Vec<_>>()
            .join(" │ ");
        if self.use_color {
            output.push_str(&header_row.bold().to_string());
        } else {
            output.push_str(&header_row);
        }
        output.push('\n');

        let separator = widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("─┼─");
        output.push_str(&separator);
        output.push('\n');

        for row in &rows {
            let line = row
                .iter()
                .enumerate()
                .map(|(i, cell)| {
                    // Pad before painting so escape codes never skew alignment
                    let padded = format!("{:width$}", cell, width = widths[i]);
                    if self.use_color && i == 2 {
                        match TypeStyle::classify(cell) {
                            Some(style) => padded.color(style.color()).to_string(),
                            None => padded,
                        }
                    } else {
                        padded
                    }
                })
                .collect::<Vec<_>>()
                .join(" │ ");
            output.push_str(&line);
            output.push('\n');
        }

        output
    }

    fn cells(&self, row: &FieldRow) -> [String; 5] {
        let name = if row.required {
            format!("{} (required)", row.name)
        } else {
            row.name.clone()
        };

        let marker = if row.read_only {
            "read-only".to_string()
        } else {
            String::new()
        };

        let format = row.format.clone().unwrap_or_else(|| self.placeholder.clone());
        let max_length = match row.max_length {
            Some(length) => format!("{} characters", length),
            None => self.placeholder.clone(),
        };

        [name, marker, row.type_name.clone(), format, max_length]
    }
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new(false)
    }
}
