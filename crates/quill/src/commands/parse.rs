//! `quill parse` command implementation.

use std::path::PathBuf;

use clap::Args;

use super::{read_input, write_stdout};
use crate::error::CliError;

/// Arguments for the parse command.
#[derive(Args)]
pub(crate) struct ParseArgs {
    /// Markup file to parse (default: read stdin).
    file: Option<PathBuf>,
}

impl ParseArgs {
    /// Execute the parse command.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let input = read_input(self.file.as_deref())?;
        let parts = quill_markup::parse(&input);
        tracing::debug!(bytes = input.len(), parts = parts.len(), "Parsed markup");
        write_stdout(&serde_json::to_string_pretty(&parts)?)
    }
}
