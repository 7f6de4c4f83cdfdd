//! Visible length of parsed markup.

use crate::part::Part;

/// Count visible units: one per Unicode scalar value of text, one per line
/// break and one per emote. Toggles and escapes are invisible.
///
/// # Examples
///
/// ```
/// use quill_markup::{length, parse};
///
/// assert_eq!(length(&parse("hello\n[b]world[/b]")), 11);
/// ```
pub fn length(parts: &[Part]) -> usize {
    parts
        .iter()
        .map(|part| match part {
            Part::Text(text) => text.chars().count(),
            Part::Newline | Part::Emote(_) => 1,
            Part::Escape | Part::Style(..) | Part::Color(_) => 0,
        })
        .sum()
}
