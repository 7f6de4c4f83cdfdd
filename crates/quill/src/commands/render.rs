//! `quill render` command implementation.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use quill_config::{CliSettings, Config};
use quill_renderer::{HtmlBackend, MarkupRenderer, TextBackend};

use super::{check_length, parse_input, read_input, render_options_from_config, write_stdout};
use crate::error::CliError;
use crate::output::Output;

/// Output format of the render command.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum Format {
    /// HTML fragment, one `<div>` per line.
    Html,
    /// Plain text without formatting.
    Text,
}

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markup file to render (default: read stdin).
    file: Option<PathBuf>,

    /// Echo markup tokens next to their effect (overrides config).
    #[arg(short, long)]
    editor: bool,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Path to configuration file (default: auto-discover quill.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output (debug logs of parsing and rendering).
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the input cannot be read.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            editor: self.editor.then_some(true),
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let input = read_input(self.file.as_deref())?;
        let parts = parse_input(&input, &config);

        // Over-long messages still render; only `quill length` rejects them
        if let Err(err) = check_length(quill_markup::length(&parts), config.limits.max_length) {
            Output::new().warning(&format!("Warning: {err}"));
        }

        let options = render_options_from_config(&config);
        let rendered = match self.format {
            Format::Html => MarkupRenderer::<HtmlBackend>::new()
                .with_options(options)
                .render(&parts),
            Format::Text => MarkupRenderer::<TextBackend>::new()
                .with_options(options)
                .render(&parts),
        };

        write_stdout(&rendered)
    }
}
