//! Streaming renderer for Quill markup with pluggable backends.
//!
//! [`MarkupRenderer`] turns the [`Part`](quill_markup::Part)s produced by
//! [`quill_markup::parse`] into output text using a [`RenderBackend`]:
//! - [`HtmlBackend`]: one `<div>` per line, inline elements for styles,
//!   colors and links, `<img>` for emotes
//! - [`TextBackend`]: visible text only (or the markup source in editor mode)
//!
//! Toggles are reconciled against a stack of open elements, so overlapping
//! input such as `[b]a[i]b[/b]c[/i]` still produces a well-nested tree.
//!
//! # Example
//!
//! ```
//! use quill_markup::parse;
//! use quill_renderer::{HtmlBackend, MarkupRenderer};
//!
//! let parts = parse("[url]example.com[/url] [:)]");
//! let html = MarkupRenderer::<HtmlBackend>::new().render(&parts);
//! assert!(html.starts_with(r#"<div><a href="https://example.com">"#));
//! ```

mod backend;
mod element;
mod html;
mod link;
mod options;
mod renderer;
mod text;

pub use backend::RenderBackend;
pub use html::{HtmlBackend, escape_html};
pub use options::RenderOptions;
pub use renderer::{MarkupRenderer, render};
pub use text::TextBackend;
