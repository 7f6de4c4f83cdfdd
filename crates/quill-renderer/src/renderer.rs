//! Streaming markup renderer with pluggable backend.

use std::marker::PhantomData;

use quill_markup::{Part, StyleKind};

use crate::backend::RenderBackend;
use crate::element::{Element, ElementStack};
use crate::html::HtmlBackend;
use crate::link::{normalize_href, placeholder, substitute};
use crate::options::RenderOptions;

/// Streaming markup renderer with pluggable backend.
///
/// Output is written front to back in a single pass. Toggles in the input
/// need not be well nested: closing an element that is not innermost closes
/// everything above it, closes the element, then reopens the rest. Line
/// breaks close every open element and reopen them on the next line.
///
/// Link destinations are written as placeholders and substituted once every
/// part has been rendered. A link collects all text rendered while it is
/// open, including across line breaks, but not emotes.
pub struct MarkupRenderer<B: RenderBackend> {
    output: String,
    stack: ElementStack,
    /// Accumulated (escaped) text of every link opened so far, by slot.
    links: Vec<String>,
    options: RenderOptions,
    _backend: PhantomData<B>,
}

impl<B: RenderBackend> Default for MarkupRenderer<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: RenderBackend> MarkupRenderer<B> {
    /// Create a new renderer with default options.
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: String::new(),
            stack: ElementStack::default(),
            links: Vec::new(),
            options: RenderOptions::default(),
            _backend: PhantomData,
        }
    }

    /// Replace all options.
    #[must_use]
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Enable or disable editor mode.
    ///
    /// In editor mode the source token of every toggle and escape is echoed
    /// next to its effect, and emotes show their token instead of an image.
    #[must_use]
    pub fn with_editor(mut self, editor: bool) -> Self {
        self.options.editor = editor;
        self
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render parts. The renderer can be reused afterwards.
    pub fn render(&mut self, parts: &[Part]) -> String {
        self.output.reserve(parts.len() * 16);
        B::document_start(&mut self.output);

        for part in parts {
            self.process_part(part);
        }

        self.close_all();
        B::document_end(&mut self.output);

        self.stack.clear();
        let links = std::mem::take(&mut self.links);
        let mut output = std::mem::take(&mut self.output);

        if B::LINK_PLACEHOLDERS && !links.is_empty() {
            let scheme = B::escape_text(&self.options.default_scheme);
            let hrefs: Vec<String> = links
                .iter()
                .map(|text| normalize_href(text, &scheme))
                .collect();
            output = substitute(&output, &hrefs);
        }

        let output = B::finish(output);
        tracing::debug!(
            parts = parts.len(),
            links = links.len(),
            bytes = output.len(),
            "Rendered markup"
        );
        output
    }

    fn process_part(&mut self, part: &Part) {
        match part {
            Part::Text(text) => self.text(text),
            Part::Escape => self.marker(part),
            Part::Newline => self.newline(),
            Part::Style(kind, true) => {
                self.marker(part);
                self.open_style(*kind);
            }
            Part::Style(kind, false) => {
                self.close_style(*kind);
                self.marker(part);
            }
            Part::Color(Some(color)) => {
                self.marker(part);
                self.push(Element::Color(*color));
            }
            Part::Color(None) => {
                self.remove(|element| matches!(element, Element::Color(_)));
                self.marker(part);
            }
            Part::Emote(kind) => B::emote(*kind, &self.options, &mut self.output),
        }
    }

    fn text(&mut self, text: &str) {
        let escaped = B::escape_text(text);
        self.output.push_str(&escaped);
        for id in self.stack.links() {
            self.links[id].push_str(&escaped);
        }
    }

    fn marker(&mut self, part: &Part) {
        if self.options.editor {
            B::marker(&part.to_string(), &self.options, &mut self.output);
        }
    }

    fn newline(&mut self) {
        self.close_all();
        B::line_break(&mut self.output);
        for element in self.stack.as_slice() {
            open_element::<B>(*element, &mut self.output);
        }
    }

    fn open_style(&mut self, kind: StyleKind) {
        if kind == StyleKind::Link {
            let id = self.links.len();
            self.links.push(String::new());
            self.push(Element::Link(id));
        } else if !self.stack.contains(Element::Style(kind)) {
            self.push(Element::Style(kind));
        }
    }

    fn close_style(&mut self, kind: StyleKind) {
        if kind == StyleKind::Link {
            self.remove(|element| matches!(element, Element::Link(_)));
        } else {
            self.remove(|element| *element == Element::Style(kind));
        }
    }

    fn push(&mut self, element: Element) {
        open_element::<B>(element, &mut self.output);
        self.stack.push(element);
    }

    /// Close the innermost element matching `predicate`, keeping every
    /// element above it open. No-op if nothing matches.
    fn remove(&mut self, predicate: impl Fn(&Element) -> bool) {
        let Some((removed, above)) = self.stack.remove_nearest(predicate) else {
            tracing::trace!("Close toggle without matching open element");
            return;
        };

        for element in above.iter().rev() {
            close_element::<B>(*element, &mut self.output);
        }
        close_element::<B>(removed, &mut self.output);
        for element in above {
            open_element::<B>(*element, &mut self.output);
        }
    }

    /// Close every open element, innermost first. The stack is unchanged.
    fn close_all(&mut self) {
        for element in self.stack.as_slice().iter().rev() {
            close_element::<B>(*element, &mut self.output);
        }
    }
}

fn open_element<B: RenderBackend>(element: Element, out: &mut String) {
    match element {
        Element::Style(kind) => B::open_style(kind, out),
        Element::Color(color) => B::open_color(color, out),
        Element::Link(id) => B::open_link(&placeholder(id), out),
    }
}

fn close_element<B: RenderBackend>(element: Element, out: &mut String) {
    match element {
        Element::Style(kind) => B::close_style(kind, out),
        Element::Color(_) => B::close_color(out),
        Element::Link(_) => B::close_link(out),
    }
}

/// Render parts as HTML with default options.
///
/// Set `editor` to echo source tokens next to their effect.
///
/// # Examples
///
/// ```
/// use quill_markup::parse;
/// use quill_renderer::render;
///
/// assert_eq!(
///     render(&parse("[b]bold text[/b]"), false),
///     "<div><strong>bold text</strong></div>"
/// );
/// ```
#[must_use]
pub fn render(parts: &[Part], editor: bool) -> String {
    MarkupRenderer::<HtmlBackend>::new()
        .with_editor(editor)
        .render(parts)
}
