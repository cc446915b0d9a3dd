use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "gearchat")]
#[command(about = "AI gaming-gear shopping assistant CLI")]
#[command(version)]
pub struct Args {
    /// Provider name (from config)
    #[arg(short = 'p', long)]
    pub provider: Option<String>,

    /// Model name
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the DULA FF product lineup
    Catalog,
    /// Configure gearchat settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
    /// List configured providers
    Providers {
        /// Show details for a specific provider
        provider: Option<String>,
    },
}
