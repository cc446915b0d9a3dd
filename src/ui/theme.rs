//! Consistent styling utilities for CLI output.
//!
//! Provides color and formatting helpers using owo-colors. All helpers
//! degrade to plain text when colors are disabled (see [`crate::output`]).

use owo_colors::OwoColorize;
use std::fmt::Display;

use crate::output;

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    /// Style for section headers (e.g., "Configuration", "Premium lineup")
    pub fn header<T: Display>(text: T) -> String {
        if output::is_no_color() {
            return text.to_string();
        }
        format!("{}", text.bold())
    }

    /// Style for labels/keys (e.g., "provider", "model")
    pub fn label<T: Display>(text: T) -> String {
        if output::is_no_color() {
            return text.to_string();
        }
        format!("{}", text.dimmed())
    }

    /// Style for primary values (e.g., provider names, product names)
    pub fn value<T: Display>(text: T) -> String {
        if output::is_no_color() {
            return text.to_string();
        }
        format!("{}", text.cyan())
    }

    /// Style for secondary/supplementary info (e.g., endpoints, descriptions)
    pub fn secondary<T: Display>(text: T) -> String {
        if output::is_no_color() {
            return text.to_string();
        }
        format!("{}", text.dimmed())
    }

    /// Style for success messages
    pub fn success<T: Display>(text: T) -> String {
        if output::is_no_color() {
            return text.to_string();
        }
        format!("{}", text.green())
    }

    /// Style for error messages
    pub fn error<T: Display>(text: T) -> String {
        if output::is_no_color() {
            return text.to_string();
        }
        format!("{}", text.red().bold())
    }

    /// Style for warning messages
    pub fn warning<T: Display>(text: T) -> String {
        if output::is_no_color() {
            return text.to_string();
        }
        format!("{}", text.yellow())
    }

    /// Style for commands (e.g., "/config", "/help")
    pub fn command<T: Display>(text: T) -> String {
        if output::is_no_color() {
            return text.to_string();
        }
        format!("{}", text.green())
    }

    /// Style for the assistant's chat bubbles
    pub fn assistant<T: Display>(text: T) -> String {
        if output::is_no_color() {
            return text.to_string();
        }
        format!("{}", text.magenta())
    }

    /// Style for prices
    pub fn price<T: Display>(text: T) -> String {
        if output::is_no_color() {
            return text.to_string();
        }
        format!("{}", text.yellow())
    }

    /// Style for hints/help text
    pub fn hint<T: Display>(text: T) -> String {
        if output::is_no_color() {
            return text.to_string();
        }
        format!("{}", text.dimmed().italic())
    }

    /// Style for the default marker
    pub fn default_marker() -> String {
        if output::is_no_color() {
            return "(default)".to_string();
        }
        format!("{}", "(default)".dimmed())
    }

    /// Style for version info
    pub fn version<T: Display>(text: T) -> String {
        if output::is_no_color() {
            return text.to_string();
        }
        format!("{}", text.dimmed())
    }
}
