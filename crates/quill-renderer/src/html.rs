//! HTML backend.
//!
//! Each line becomes a `<div>`. Styles map to `<strong>`, `<em>`, `<ins>` and
//! `<del>`, colors to `<span style="color: ...">`, links to `<a href>`.

use std::borrow::Cow;
use std::fmt::Write;

use quill_markup::{Color, EmoteKind, StyleKind};

use crate::backend::RenderBackend;
use crate::options::RenderOptions;

/// HTML render backend.
pub struct HtmlBackend;

impl HtmlBackend {
    fn tag_name(kind: StyleKind) -> &'static str {
        match kind {
            StyleKind::Bold => "strong",
            StyleKind::Italic => "em",
            StyleKind::Underline => "ins",
            StyleKind::Strikethrough => "del",
            StyleKind::Link => "a",
        }
    }
}

impl RenderBackend for HtmlBackend {
    const LINK_PLACEHOLDERS: bool = true;

    fn escape_text(text: &str) -> Cow<'_, str> {
        escape_html(text)
    }

    fn document_start(out: &mut String) {
        out.push_str("<div>");
    }

    fn document_end(out: &mut String) {
        out.push_str("</div>");
    }

    fn line_break(out: &mut String) {
        out.push_str("</div><div>");
    }

    fn open_style(kind: StyleKind, out: &mut String) {
        write!(out, "<{}>", Self::tag_name(kind)).unwrap();
    }

    fn close_style(kind: StyleKind, out: &mut String) {
        write!(out, "</{}>", Self::tag_name(kind)).unwrap();
    }

    fn open_color(color: Color, out: &mut String) {
        write!(out, r#"<span style="color: {color}">"#).unwrap();
    }

    fn close_color(out: &mut String) {
        out.push_str("</span>");
    }

    fn open_link(href: &str, out: &mut String) {
        write!(out, r#"<a href="{href}">"#).unwrap();
    }

    fn close_link(out: &mut String) {
        out.push_str("</a>");
    }

    fn emote(kind: EmoteKind, options: &RenderOptions, out: &mut String) {
        let class = escape_html(&options.emote_class);
        let src = options.emote_src(kind);
        let src = escape_html(&src);
        if options.editor {
            write!(
                out,
                r#"<span class="{class}" style="background-image: url({src})">[{}]</span>"#,
                escape_html(kind.tag())
            )
            .unwrap();
        } else {
            write!(
                out,
                r#"<img class="{class}" src="{src}" alt="{}">"#,
                kind.name()
            )
            .unwrap();
        }
    }

    fn marker(token: &str, options: &RenderOptions, out: &mut String) {
        write!(
            out,
            r#"<span class="{}">{}</span>"#,
            escape_html(&options.marker_class),
            escape_html(token)
        )
        .unwrap();
    }

    /// Keeps leading and trailing spaces and empty lines visible when the
    /// output is placed in a content-editable host.
    fn finish(output: String) -> String {
        output
            .replace("<div> ", "<div>&nbsp;")
            .replace(" </div>", " <br></div>")
            .replace("<div></div>", "<div><br></div>")
    }
}

/// Escape the five HTML-significant characters.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
///
/// # Examples
///
/// ```
/// use quill_renderer::escape_html;
///
/// assert_eq!(escape_html("a < b"), "a &lt; b");
/// assert_eq!(escape_html("it's"), "it&#39;s");
/// ```
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}
