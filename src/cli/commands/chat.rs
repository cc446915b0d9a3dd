use anyhow::Result;

use crate::assistant::build_system_instruction;
use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::llm::LlmClient;
use crate::repl::{ChatShell, ShellConfig};

pub struct ChatOptions {
    pub provider: Option<String>,
    pub model: Option<String>,
}

/// Starts the interactive consultant.
pub async fn run_chat(options: ChatOptions) -> Result<()> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default();

    let resolved = resolve_config(
        &ResolveOptions {
            provider: options.provider,
            model: options.model,
        },
        &file_config,
    )?;

    let client = LlmClient::new(
        resolved.endpoint.clone(),
        resolved.api_key.clone(),
        resolved.model.clone(),
        build_system_instruction(),
    );

    let shell_config = ShellConfig {
        provider_name: resolved.provider_name,
        endpoint: resolved.endpoint,
        model: resolved.model,
    };

    ChatShell::new(shell_config, client).run().await
}
