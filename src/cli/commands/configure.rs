//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::{Select, Text};

use crate::config::{AssistantConfig, ConfigFile, ConfigManager};
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command to edit default settings.
///
/// Allows the user to interactively set the default provider and model.
pub fn run_configure() -> Result<()> {
    handle_prompt_cancellation(run_configure_inner)
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default();

    // Check if at least one provider is configured
    if config.providers.is_empty() {
        bail!(
            "No providers configured.\n\n\
             Add providers to ~/.config/gearchat/config.toml first."
        );
    }

    print_current_defaults(&config);

    // Get provider names for selection
    let provider_names: Vec<String> = config.providers.keys().cloned().collect();

    // Select default provider
    let default_provider = config.assistant.provider.clone();
    let provider = select_provider(&provider_names, default_provider.as_deref())?;

    // Get models for the selected provider
    let provider_config = config.providers.get(&provider);
    let available_models: Vec<String> = provider_config
        .map(|p| p.models.clone())
        .unwrap_or_default();

    // Select default model
    let default_model = config.assistant.model.clone();
    let model = select_model(&available_models, default_model.as_deref())?;

    config.assistant = AssistantConfig {
        provider: Some(provider),
        model: Some(model),
    };

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

/// Prints the current defaults without entering the interactive flow.
pub fn show_configuration() -> Result<()> {
    let manager = ConfigManager::new()?;
    let config = manager.load_or_default();
    print_current_defaults(&config);
    Ok(())
}

fn print_current_defaults(config: &ConfigFile) {
    println!("{}", Style::header("Current defaults"));
    println!(
        "  {}  {}",
        Style::label("provider"),
        config
            .assistant
            .provider
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!(
        "  {}     {}",
        Style::label("model"),
        config
            .assistant
            .model
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!();
}

fn select_provider(providers: &[String], default: Option<&str>) -> Result<String> {
    let default_index = default
        .and_then(|d| providers.iter().position(|p| p == d))
        .unwrap_or(0);

    let selection = Select::new("Default provider:", providers.to_vec())
        .with_starting_cursor(default_index)
        .prompt()?;

    Ok(selection)
}

fn select_model(available_models: &[String], default: Option<&str>) -> Result<String> {
    if available_models.is_empty() {
        // No models configured, fall back to text input
        let mut prompt = Text::new("Default model:").with_help_message("Enter the model name");

        if let Some(d) = default {
            prompt = prompt.with_default(d);
        }

        let model = prompt.prompt()?;

        if model.trim().is_empty() {
            bail!("Model name cannot be empty");
        }

        Ok(model.trim().to_string())
    } else {
        // Models available, use selection
        let default_index = default
            .and_then(|d| available_models.iter().position(|m| m == d))
            .unwrap_or(0);

        let selection = Select::new("Default model:", available_models.to_vec())
            .with_starting_cursor(default_index)
            .prompt()?;

        Ok(selection)
    }
}
