//! Per-type styling for rendered field tables
//!
//! Copyright (c) 2025 Apiref Team
//! Licensed under the Apache-2.0 license

use colored::{Color, ColoredString, Colorize};

/// Display style for a field's projected type
///
/// The palette covers the five types the table colors; any other type name
/// renders unstyled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeStyle {
    String,
    Boolean,
    Array,
    Object,
    Integer,
}

impl TypeStyle {
    /// Classify a projected type name
    pub fn classify(type_name: &str) -> Option<Self> {
        match type_name {
            "string" => Some(TypeStyle::String),
            "boolean" => Some(TypeStyle::Boolean),
            "array" => Some(TypeStyle::Array),
            "object" => Some(TypeStyle::Object),
            "integer" => Some(TypeStyle::Integer),
            _ => None,
        }
    }

    /// Get the stable class token for stylesheet-driven consumers
    pub fn class_name(&self) -> &'static str {
        match self {
            TypeStyle::String => "string",
            TypeStyle::Boolean => "boolean",
            TypeStyle::Array => "array",
            TypeStyle::Object => "object",
            TypeStyle::Integer => "integer",
        }
    }

    /// Get the terminal color for this style
    pub fn color(&self) -> Color {
        match self {
            TypeStyle::String => Color::Yellow,
            TypeStyle::Boolean => Color::Magenta,
            TypeStyle::Array => Color::Red,
            TypeStyle::Object => Color::Cyan,
            TypeStyle::Integer => Color::Green,
        }
    }

    /// Paint a type name for terminal output; unknown names pass through
    pub fn paint(type_name: &str) -> ColoredString {
        match Self::classify(type_name) {
            Some(style) => type_name.color(style.color()),
            None => type_name.normal(),
        }
    }
}
