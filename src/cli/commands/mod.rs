//! Subcommand implementations.

/// Catalog listing command handler.
pub mod catalog;

/// Chat mode command handler.
pub mod chat;

/// Configure command handler.
pub mod configure;

/// Provider management command handler.
pub mod providers;
