//! `quill length` command implementation.

use std::path::PathBuf;

use clap::Args;
use quill_config::{CliSettings, Config};

use super::{check_length, parse_input, read_input, write_stdout};
use crate::error::CliError;

/// Arguments for the length command.
#[derive(Args)]
pub(crate) struct LengthArgs {
    /// Markup file to measure (default: read stdin).
    file: Option<PathBuf>,

    /// Maximum visible length (overrides config).
    #[arg(short, long)]
    max: Option<usize>,

    /// Path to configuration file (default: auto-discover quill.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl LengthArgs {
    /// Execute the length command.
    ///
    /// Prints the visible length, then fails if it exceeds the configured
    /// limit.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the input cannot be read, or
    /// the message is over the limit.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            max_length: self.max,
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let input = read_input(self.file.as_deref())?;
        let length = quill_markup::length(&parse_input(&input, &config));
        tracing::debug!(length, max_length = ?config.limits.max_length, "Measured markup");

        write_stdout(&length.to_string())?;
        check_length(length, config.limits.max_length)
    }
}
