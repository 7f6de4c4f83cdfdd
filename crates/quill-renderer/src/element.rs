//! Stack of currently open output elements.

use quill_markup::{Color, StyleKind};

/// An open element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Element {
    /// Fixed-name style element. Never [`StyleKind::Link`].
    Style(StyleKind),
    /// Color span.
    Color(Color),
    /// Link, identified by its slot in the renderer's link list.
    Link(usize),
}

/// Open elements, bottom (outermost) to top (innermost).
#[derive(Debug, Default)]
pub(crate) struct ElementStack {
    elements: Vec<Element>,
}

impl ElementStack {
    pub(crate) fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub(crate) fn contains(&self, element: Element) -> bool {
        self.elements.contains(&element)
    }

    /// Open elements, outermost first.
    pub(crate) fn as_slice(&self) -> &[Element] {
        &self.elements
    }

    /// Slots of every open link.
    pub(crate) fn links(&self) -> impl Iterator<Item = usize> + '_ {
        self.elements.iter().filter_map(|element| match element {
            Element::Link(id) => Some(*id),
            _ => None,
        })
    }

    /// Remove the matching element nearest to the top.
    ///
    /// Returns the removed element and the elements that were above it
    /// (outermost first). Those stay on the stack; the caller closes them,
    /// closes the removed element and reopens them in order.
    pub(crate) fn remove_nearest(
        &mut self,
        predicate: impl Fn(&Element) -> bool,
    ) -> Option<(Element, &[Element])> {
        let index = self.elements.iter().rposition(predicate)?;
        let removed = self.elements.remove(index);
        Some((removed, &self.elements[index..]))
    }

    pub(crate) fn clear(&mut self) {
        self.elements.clear();
    }
}
