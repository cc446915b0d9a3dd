//! Interactive consultant shell.
//!
//! The terminal view over the assistant session: renders the streamed
//! reply as it arrives and offers slash commands for everything else.

/// Slash command parsing and autocomplete.
pub mod command;
mod shell;
mod ui;

pub use shell::{ChatShell, ShellConfig};
