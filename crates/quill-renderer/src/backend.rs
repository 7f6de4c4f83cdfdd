//! Render backend trait for format-specific output.
//!
//! The renderer owns stack reconciliation and link resolution; a backend only
//! decides how each piece is written.

use std::borrow::Cow;

use quill_markup::{Color, EmoteKind, StyleKind};

use crate::options::RenderOptions;

/// Backend trait for format-specific rendering operations.
pub trait RenderBackend {
    /// Whether [`open_link`](Self::open_link) writes its href argument.
    ///
    /// When `true`, link placeholders in the output are replaced with the
    /// resolved destinations after the last part is rendered.
    const LINK_PLACEHOLDERS: bool;

    /// Escape literal text. Called exactly once per text part.
    fn escape_text(text: &str) -> Cow<'_, str>;

    /// Write the start of the document.
    fn document_start(_out: &mut String) {}

    /// Write the end of the document.
    fn document_end(_out: &mut String) {}

    /// End the current line and start a new one at the document root.
    fn line_break(out: &mut String);

    /// Open a style element. Never called with [`StyleKind::Link`].
    fn open_style(kind: StyleKind, out: &mut String);

    /// Close a style element opened with [`open_style`](Self::open_style).
    fn close_style(kind: StyleKind, out: &mut String);

    /// Open a color element.
    fn open_color(color: Color, out: &mut String);

    /// Close a color element.
    fn close_color(out: &mut String);

    /// Open a link element.
    ///
    /// # Arguments
    ///
    /// * `href` - Placeholder for the destination, resolved after rendering
    /// * `out` - Output buffer to write to
    fn open_link(href: &str, out: &mut String);

    /// Close a link element.
    fn close_link(out: &mut String);

    /// Render an emote.
    fn emote(kind: EmoteKind, options: &RenderOptions, out: &mut String);

    /// Render an editor marker echoing a source token such as `[b]` or `\`.
    fn marker(token: &str, options: &RenderOptions, out: &mut String);

    /// Post-process the complete output.
    #[must_use]
    fn finish(output: String) -> String {
        output
    }
}
