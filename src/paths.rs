//! XDG-style path utilities for the configuration directory.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Returns the configuration directory for gearchat.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/gearchat` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/gearchat` otherwise
pub fn config_dir() -> Result<PathBuf> {
    std::env::var("XDG_CONFIG_HOME").map_or_else(
        |_| Ok(home_dir()?.join(".config").join("gearchat")),
        |xdg| Ok(PathBuf::from(xdg).join("gearchat")),
    )
}

/// Returns the user's home directory.
fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Failed to determine home directory")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_config_dir_default() {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe { std::env::remove_var("XDG_CONFIG_HOME") };

        let dir = config_dir().unwrap();
        assert!(dir.ends_with(".config/gearchat"));

        if let Some(val) = original {
            unsafe { std::env::set_var("XDG_CONFIG_HOME", val) };
        }
    }

    #[test]
    #[serial]
    fn test_config_dir_xdg_override() {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe { std::env::set_var("XDG_CONFIG_HOME", "/custom/config") };

        let dir = config_dir().unwrap();
        assert_eq!(dir, PathBuf::from("/custom/config/gearchat"));

        if let Some(val) = original {
            unsafe { std::env::set_var("XDG_CONFIG_HOME", val) };
        } else {
            unsafe { std::env::remove_var("XDG_CONFIG_HOME") };
        }
    }
}
