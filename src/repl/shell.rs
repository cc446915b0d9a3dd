use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use std::io::{self, Write};

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::assistant::{SendOutcome, SessionManager};
use crate::llm::LlmClient;
use crate::ui::{Spinner, Style};

/// Resolved settings the shell displays via `/config`.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// The provider name.
    pub provider_name: String,
    /// The API endpoint URL.
    pub endpoint: String,
    /// The model in use.
    pub model: String,
}

/// The interactive consultant shell.
///
/// A prompt loop over the assistant session: free text goes to the model,
/// slash commands are handled locally. Submission is naturally blocked
/// while a reply streams — the prompt only returns once `send` completes.
pub struct ChatShell {
    config: ShellConfig,
    session: SessionManager<LlmClient>,
}

impl ChatShell {
    pub fn new(config: ShellConfig, client: LlmClient) -> Self {
        Self {
            config,
            session: SessionManager::new(client),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header();

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightMagenta)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("Ask about gaming gear, /help for commands, Ctrl+C to quit")
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(&cmd) {
                            break;
                        }
                    }
                    Input::Text(text) => {
                        self.ask(&text).await;
                    }
                },
                Err(
                    inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted,
                ) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    fn handle_command(&mut self, cmd: &SlashCommand) -> bool {
        match cmd {
            SlashCommand::Catalog => {
                crate::cli::commands::catalog::print_catalog();
                true
            }
            SlashCommand::Clear => {
                self.session.reset();
                println!("{} Conversation cleared\n", Style::success("✓"));
                true
            }
            SlashCommand::Config => {
                ui::print_config(&self.config);
                true
            }
            SlashCommand::Help => {
                ui::print_help();
                true
            }
            SlashCommand::Quit => false,
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
                true
            }
        }
    }

    /// Sends one utterance and prints the reply as it streams.
    ///
    /// The session absorbs failures into the transcript, so this never
    /// errors; the worst case is the fallback turn printed below.
    async fn ask(&mut self, text: &str) {
        let spinner = Spinner::new("Thinking...");
        let mut waiting = true;

        let outcome = self
            .session
            .send(text, |fragment| {
                if waiting {
                    spinner.stop();
                    waiting = false;
                }
                print!("{fragment}");
                let _ = io::stdout().flush();
            })
            .await;

        if waiting {
            spinner.stop();
        }

        match outcome {
            SendOutcome::Completed => {
                println!();
                println!();
            }
            SendOutcome::Failed => {
                // The apology turn is already in the transcript; show it.
                if let Some(turn) = self.session.transcript().last() {
                    println!();
                    println!("{}", Style::warning(&turn.text));
                    println!();
                }
            }
            SendOutcome::IgnoredEmpty | SendOutcome::IgnoredBusy => {}
        }
    }
}
