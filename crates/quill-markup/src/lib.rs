//! Bracket-tag inline markup for Quill.
//!
//! Converts markup such as `[b]bold[/b] [color=#ff0000]red[/color] [:)]` into
//! a flat, ordered list of [`Part`]s. Parts carry no nesting information;
//! renderers pair opening and closing toggles themselves.
//!
//! # Syntax
//!
//! - `[b]`, `[i]`, `[u]`, `[s]`, `[url]` and their `[/...]` closing forms
//! - `[color=#rrggbb]` ... `[/color]`
//! - Emotes: `[:)]`, `[:(]`, `[:D]`, `[:3]`, `[D:]`, `[B)]`, `[;(]`, `[;)]`
//! - `\` escapes the next character, so `\[b]` is literal text and `\\` is a
//!   single backslash
//!
//! Unrecognized tags, stray brackets and malformed colors are kept as text.
//!
//! # Example
//!
//! ```
//! use quill_markup::{Part, StyleKind, length, parse, to_markup};
//!
//! let parts = parse("[i]hi[/i] \\[b]");
//! assert_eq!(parts[0], Part::Style(StyleKind::Italic, true));
//! assert_eq!(length(&parts), 6);
//! assert_eq!(to_markup(&parts), "[i]hi[/i] \\[b]");
//! ```

mod measure;
mod part;
mod tokenizer;

pub use measure::length;
pub use part::{Color, EmoteKind, Part, StyleKind, to_markup};
pub use tokenizer::parse;

#[cfg(test)]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Part: Send, Sync, Clone);
    assert_impl_all!(Color: Send, Sync, Copy);

    #[test]
    fn test_recovers_literal_text() {
        let parts = parse("a [b]b\\[i]c[/b]\n[:)]d");
        let literal: String = parts
            .iter()
            .filter_map(|part| match part {
                Part::Text(text) => Some(text.as_str()),
                Part::Newline => Some("\n"),
                _ => None,
            })
            .collect();
        assert_eq!(literal, "a b[i]c\nd");
    }
}
