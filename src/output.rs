//! Global output configuration.
//!
//! Centralized control over color handling: colors can be disabled via the
//! `--no-color` flag or the `NO_COLOR` environment variable
//! (<https://no-color.org/>). The styled helpers in [`crate::ui`] consult
//! this before applying any escape codes.

use std::sync::OnceLock;

/// Global output configuration.
static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

/// Output configuration settings.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Disable colored output.
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: std::env::var("NO_COLOR").is_ok(),
        }
    }
}

/// Initialize the global output configuration.
///
/// This should be called once at startup with the CLI flags.
/// If called multiple times, subsequent calls are ignored.
pub fn init(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

/// Check if colors are disabled.
pub fn is_no_color() -> bool {
    OUTPUT_CONFIG.get_or_init(OutputConfig::default).no_color
}
