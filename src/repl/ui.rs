//! Chat shell UI components.

use crate::assistant::WELCOME_MESSAGE;
use crate::ui::Style;

use super::shell::ShellConfig;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header() {
    println!(
        "{} {} - DULA FF Gaming Gear Consultant",
        Style::header("gearchat"),
        Style::version(format!("v{VERSION}"))
    );
    println!();
    println!("{}", Style::assistant(WELCOME_MESSAGE));
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("GG! Come back anytime."));
}

pub fn print_config(config: &ShellConfig) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}   {}",
        Style::label("provider"),
        Style::value(&config.provider_name)
    );
    println!(
        "  {}      {}",
        Style::label("model"),
        Style::value(&config.model)
    );
    println!(
        "  {}   {}",
        Style::label("endpoint"),
        Style::secondary(&config.endpoint)
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    println!(
        "  {}  {}",
        Style::command("/catalog"),
        Style::secondary("Browse the DULA FF product lineup")
    );
    println!(
        "  {}    {}",
        Style::command("/clear"),
        Style::secondary("Start a fresh conversation")
    );
    println!(
        "  {}   {}",
        Style::command("/config"),
        Style::secondary("Show current configuration")
    );
    println!(
        "  {}     {}",
        Style::command("/help"),
        Style::secondary("Show this help")
    );
    println!(
        "  {}     {}",
        Style::command("/quit"),
        Style::secondary("Exit the consultant")
    );
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
