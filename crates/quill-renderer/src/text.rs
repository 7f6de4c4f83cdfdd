//! Plain-text backend.
//!
//! Drops all formatting and keeps the visible text, one line per `\n`. In
//! editor mode every source token is echoed, which reproduces the markup.

use std::borrow::Cow;

use quill_markup::{Color, EmoteKind, StyleKind};

use crate::backend::RenderBackend;
use crate::options::RenderOptions;

/// Plain-text render backend.
pub struct TextBackend;

impl RenderBackend for TextBackend {
    const LINK_PLACEHOLDERS: bool = false;

    fn escape_text(text: &str) -> Cow<'_, str> {
        Cow::Borrowed(text)
    }

    fn line_break(out: &mut String) {
        out.push('\n');
    }

    fn open_style(_kind: StyleKind, _out: &mut String) {}

    fn close_style(_kind: StyleKind, _out: &mut String) {}

    fn open_color(_color: Color, _out: &mut String) {}

    fn close_color(_out: &mut String) {}

    fn open_link(_href: &str, _out: &mut String) {}

    fn close_link(_out: &mut String) {}

    fn emote(kind: EmoteKind, _options: &RenderOptions, out: &mut String) {
        out.push('[');
        out.push_str(kind.tag());
        out.push(']');
    }

    fn marker(token: &str, _options: &RenderOptions, out: &mut String) {
        out.push_str(token);
    }
}
