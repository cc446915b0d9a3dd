use anyhow::Result;
use clap::Parser;

use gearchat_cli::cli::commands::{catalog, chat, configure, providers};
use gearchat_cli::cli::{Args, Command};
use gearchat_cli::output::{self, OutputConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig {
        no_color: args.no_color || OutputConfig::default().no_color,
    });

    match args.command {
        Some(Command::Catalog) => {
            catalog::print_catalog();
        }
        Some(Command::Configure { show }) => {
            if show {
                configure::show_configuration()?;
            } else {
                configure::run_configure()?;
            }
        }
        Some(Command::Providers { provider }) => {
            providers::print_providers(provider.as_deref())?;
        }
        None => {
            let options = chat::ChatOptions {
                provider: args.provider,
                model: args.model,
            };
            chat::run_chat(options).await?;
        }
    }

    Ok(())
}
