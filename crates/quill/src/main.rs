//! Quill CLI - Markup renderer.
//!
//! Provides commands for:
//! - `render`: Render markup to HTML or plain text
//! - `parse`: Print the parsed parts as JSON
//! - `length`: Print the visible length and enforce a length limit

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{LengthArgs, ParseArgs, RenderArgs};
use output::Output;

/// Quill - Markup renderer.
#[derive(Parser)]
#[command(name = "quill", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render markup to HTML or plain text.
    Render(RenderArgs),
    /// Print the parsed parts as JSON.
    Parse(ParseArgs),
    /// Print the visible length of a message.
    Length(LengthArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = matches!(&cli.command, Commands::Render(args) if args.verbose);

    // --verbose enables DEBUG level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Parse(args) => args.execute(),
        Commands::Length(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
