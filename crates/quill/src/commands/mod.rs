//! CLI command implementations.

pub(crate) mod length;
pub(crate) mod parse;
pub(crate) mod render;

pub(crate) use length::LengthArgs;
pub(crate) use parse::ParseArgs;
pub(crate) use render::RenderArgs;

use std::io::{self, Read, Write};
use std::path::Path;

use quill_config::Config;
use quill_markup::Part;
use quill_renderer::RenderOptions;

use crate::error::CliError;

/// Read the message from `file`, or from stdin when no file is given.
fn read_input(file: Option<&Path>) -> Result<String, CliError> {
    if let Some(path) = file {
        return Ok(std::fs::read_to_string(path)?);
    }
    let mut input = String::new();
    io::stdin().lock().read_to_string(&mut input)?;
    Ok(input)
}

/// Parse the message, logging its size and the config file in use.
fn parse_input(input: &str, config: &Config) -> Vec<Part> {
    let parts = quill_markup::parse(input);
    tracing::debug!(
        bytes = input.len(),
        parts = parts.len(),
        config = ?config.config_path,
        "Parsed markup"
    );
    parts
}

/// Write `content` to stdout followed by a newline.
fn write_stdout(content: &str) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{content}")?;
    stdout.flush()?;
    Ok(())
}

/// Build renderer options from loaded configuration.
fn render_options_from_config(config: &Config) -> RenderOptions {
    RenderOptions {
        editor: config.render.editor,
        emote_base_path: config.emotes.base_path.clone(),
        emote_extension: config.emotes.extension.clone(),
        default_scheme: config.render.default_scheme.clone(),
        marker_class: config.render.marker_class.clone(),
        emote_class: config.render.emote_class.clone(),
    }
}

/// Fail when `length` exceeds `max_length`.
fn check_length(length: usize, max_length: Option<usize>) -> Result<(), CliError> {
    match max_length {
        Some(max) if length > max => Err(CliError::Validation(format!(
            "message is {length} characters long, limit is {max}"
        ))),
        _ => Ok(()),
    }
}
