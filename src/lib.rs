//! # gearchat - Streaming Gaming-Gear Consultant CLI
//!
//! `gearchat` is the DULA FF AI gaming consultant as a command-line tool.
//! It streams responses from OpenAI-compatible API endpoints and keeps a
//! per-run conversation context so follow-up questions stay on topic.
//!
//! ## Features
//!
//! - **Streaming replies**: see the consultant's answer as it arrives
//! - **Conversation context**: one remote session per run, created lazily
//!   on the first message and reused for every turn after it
//! - **Built-in catalog**: the consultant knows the DULA FF product lineup
//! - **Multiple providers**: configure and switch between API providers
//!
//! ## Quick Start
//!
//! ```bash
//! # Start chatting
//! gearchat
//!
//! # Browse the product lineup
//! gearchat catalog
//!
//! # Override the model for this run
//! gearchat --model llama3.2
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/gearchat/config.toml`:
//!
//! ```toml
//! [assistant]
//! provider = "ollama"
//! model = "gemma3:12b"
//!
//! [providers.ollama]
//! endpoint = "http://localhost:11434"
//! models = ["gemma3:12b", "llama3.2"]
//! ```

/// The conversational assistant core: session manager, transcript, persona.
pub mod assistant;

/// The built-in DULA FF product catalog.
pub mod catalog;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and provider settings.
pub mod config;

/// Streaming client for OpenAI-compatible APIs.
pub mod llm;

/// Global output configuration (color handling).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Interactive chat shell (the terminal view over the assistant session).
pub mod repl;

/// Terminal UI components (spinner, colors).
pub mod ui;
