//! Tag-recognition automaton.
//!
//! Text is collected into a pending buffer. Every unescaped `]` rescans the
//! buffer backwards for the nearest `[` and tries to match the body between
//! them; on failure both brackets stay in the buffer as literal text, so a
//! later `]` can still close around an earlier `[`.

use crate::part::{MAX_TAG_BODY, Part};

#[derive(Debug, Default)]
struct Tokenizer {
    /// Parts produced so far.
    parts: Vec<Part>,
    /// Uncommitted literal text.
    buffer: String,
    /// The next character is escaped.
    escaped: bool,
}

impl Tokenizer {
    fn push(&mut self, part: Part) {
        self.parts.push(part);
    }

    /// Commit the pending buffer as a text part.
    fn flush(&mut self) {
        if !self.buffer.is_empty() {
            let text = std::mem::take(&mut self.buffer);
            self.push(Part::Text(text));
        }
    }

    /// Try to close a tag at an unescaped `]`. Returns `false` if the
    /// bracket is literal.
    fn close_tag(&mut self) -> bool {
        // A `[` further back than this would enclose a body too long to be a tag
        let mut start = self.buffer.len().saturating_sub(MAX_TAG_BODY + 1);
        while !self.buffer.is_char_boundary(start) {
            start += 1;
        }
        let Some(open) = self.buffer[start..].rfind('[').map(|i| start + i) else {
            return false;
        };

        // An escaped `[` is always the first character of the buffer, right
        // after the escape part.
        if open == 0 && matches!(self.parts.last(), Some(Part::Escape)) {
            return false;
        }

        let Some(part) = Part::from_tag_body(&self.buffer[open + 1..]) else {
            return false;
        };

        self.buffer.truncate(open);
        self.flush();
        self.push(part);
        true
    }

    fn run(mut self, input: &str) -> Vec<Part> {
        for c in input.chars() {
            if !std::mem::take(&mut self.escaped) {
                if c == '\\' {
                    self.flush();
                    self.push(Part::Escape);
                    self.escaped = true;
                    continue;
                }
                if c == ']' && self.close_tag() {
                    continue;
                }
            }

            // Escaping never suppresses a line break.
            if c == '\n' {
                self.flush();
                self.push(Part::Newline);
                continue;
            }

            self.buffer.push(c);
        }

        self.flush();
        self.parts
    }
}

/// Parse markup into parts.
///
/// Never fails: anything that is not a recognized tag is kept as literal text.
///
/// # Examples
///
/// ```
/// use quill_markup::{Part, StyleKind, parse};
///
/// assert_eq!(
///     parse("[b]hi[/b]"),
///     vec![
///         Part::Style(StyleKind::Bold, true),
///         Part::Text("hi".to_owned()),
///         Part::Style(StyleKind::Bold, false),
///     ]
/// );
/// ```
pub fn parse(input: &str) -> Vec<Part> {
    Tokenizer::default().run(input)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::part::{Color, EmoteKind, StyleKind, to_markup};

    fn text(s: &str) -> Part {
        Part::Text(s.to_owned())
    }

    #[test]
    fn test_parse_empty_string() {
        assert_eq!(parse(""), vec![]);
    }

    #[test]
    fn test_parse_text() {
        assert_eq!(parse("hello"), vec![text("hello")]);
    }

    #[test]
    fn test_parse_newline() {
        assert_eq!(
            parse("hello\nworld"),
            vec![text("hello"), Part::Newline, text("world")]
        );
    }

    #[test]
    fn test_parse_basic_tags() {
        assert_eq!(
            parse("[b]hello[/b] world"),
            vec![
                Part::Style(StyleKind::Bold, true),
                text("hello"),
                Part::Style(StyleKind::Bold, false),
                text(" world"),
            ]
        );
    }

    #[test]
    fn test_parse_nested_tags() {
        assert_eq!(
            parse("[b]hello [i]world[/i][/b]"),
            vec![
                Part::Style(StyleKind::Bold, true),
                text("hello "),
                Part::Style(StyleKind::Italic, true),
                text("world"),
                Part::Style(StyleKind::Italic, false),
                Part::Style(StyleKind::Bold, false),
            ]
        );
    }

    #[test]
    fn test_parse_all_styles() {
        assert_eq!(
            parse("[u][s][url]"),
            vec![
                Part::Style(StyleKind::Underline, true),
                Part::Style(StyleKind::Strikethrough, true),
                Part::Style(StyleKind::Link, true),
            ]
        );
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(
            parse("[color=#a834cf]colored text![/color]"),
            vec![
                Part::Color(Some(Color::new(168, 52, 207))),
                text("colored text!"),
                Part::Color(None),
            ]
        );
    }

    #[test]
    fn test_parse_uppercase_color() {
        assert_eq!(
            parse("[color=#A834CF]x"),
            vec![Part::Color(Some(Color::new(168, 52, 207))), text("x")]
        );
    }

    #[test]
    fn test_parse_malformed_color_is_text() {
        assert_eq!(
            parse("[color=#12345]x[/color]"),
            vec![text("[color=#12345]x"), Part::Color(None)]
        );
        assert_eq!(parse("[color=red]"), vec![text("[color=red]")]);
    }

    #[test]
    fn test_parse_emotes() {
        assert_eq!(
            parse("hi [:)] [B)][;)]"),
            vec![
                text("hi "),
                Part::Emote(EmoteKind::Smile),
                text(" "),
                Part::Emote(EmoteKind::Sunglasses),
                Part::Emote(EmoteKind::Winking),
            ]
        );
    }

    #[test]
    fn test_parse_escaped_tags() {
        assert_eq!(
            parse("\\[[b]hello\\[/b]"),
            vec![
                Part::Escape,
                text("["),
                Part::Style(StyleKind::Bold, true),
                text("hello"),
                Part::Escape,
                text("[/b]"),
            ]
        );
    }

    #[test]
    fn test_parse_escaped_tag_then_real_close() {
        assert_eq!(
            parse("this text is \\[b]not bold[/b]"),
            vec![
                text("this text is "),
                Part::Escape,
                text("[b]not bold"),
                Part::Style(StyleKind::Bold, false),
            ]
        );
    }

    #[test]
    fn test_parse_escaped_closing_bracket() {
        assert_eq!(
            parse("[b\\]"),
            vec![text("[b"), Part::Escape, text("]")]
        );
    }

    #[test]
    fn test_parse_escaped_backslash() {
        assert_eq!(
            parse("a\\\\[b]"),
            vec![
                text("a"),
                Part::Escape,
                text("\\"),
                Part::Style(StyleKind::Bold, true),
            ]
        );
    }

    #[test]
    fn test_parse_escaped_newline_still_breaks() {
        assert_eq!(
            parse("one\\\ntwo"),
            vec![text("one"), Part::Escape, Part::Newline, text("two")]
        );
    }

    #[test]
    fn test_parse_dangling_escape() {
        assert_eq!(parse("end \\"), vec![text("end "), Part::Escape]);
    }

    #[test]
    fn test_parse_incorrectly_nested_tags_and_escapes() {
        assert_eq!(
            parse("now [b[url]https://[i]example.com[/url] is \\ wrong here \\ [/i] \\"),
            vec![
                text("now [b"),
                Part::Style(StyleKind::Link, true),
                text("https://"),
                Part::Style(StyleKind::Italic, true),
                text("example.com"),
                Part::Style(StyleKind::Link, false),
                text(" is "),
                Part::Escape,
                text(" wrong here "),
                Part::Escape,
                text(" "),
                Part::Style(StyleKind::Italic, false),
                text(" "),
                Part::Escape,
            ]
        );
    }

    #[test]
    fn test_parse_a_bunch_of_fake_tags() {
        assert_eq!(
            parse("these [tags] are invalid ]"),
            vec![text("these [tags] are invalid ]")]
        );
        assert_eq!(
            parse("[url]]teehee[/color ] yea [] ]"),
            vec![
                Part::Style(StyleKind::Link, true),
                text("]teehee[/color ] yea [] ]"),
            ]
        );
    }

    #[test]
    fn test_parse_failed_body_rescanned_for_inner_bracket() {
        // `[x [b]` fails as a whole, then the inner `[b]` matches
        assert_eq!(
            parse("[x [b]y"),
            vec![text("[x "), Part::Style(StyleKind::Bold, true), text("y")]
        );
    }

    #[test]
    fn test_parse_later_bracket_closes_earlier_open() {
        // The first `]` finds no `[`, the second closes around `[i`
        assert_eq!(
            parse("a] [i]"),
            vec![text("a] "), Part::Style(StyleKind::Italic, true)]
        );
        // Only the innermost candidate is tried
        assert_eq!(parse("[[b]]"), vec![text("["), Part::Style(StyleKind::Bold, true), text("]")]);
    }

    #[test]
    fn test_parse_nested_bracket_inside_failed_tag() {
        assert_eq!(
            parse("[[color=#00ff00]]"),
            vec![
                text("["),
                Part::Color(Some(Color::new(0, 255, 0))),
                text("]"),
            ]
        );
    }

    #[test]
    fn test_parse_unclosed_bracket_kept_verbatim() {
        assert_eq!(parse("[b"), vec![text("[b")]);
        assert_eq!(parse("a [url b\nc"), vec![text("a [url b"), Part::Newline, text("c")]);
    }

    #[test]
    fn test_parse_long_body_stays_literal() {
        let input = format!("[{}]", "b".repeat(MAX_TAG_BODY + 8));
        assert_eq!(parse(&input), vec![text(&input)]);
    }

    #[test]
    fn test_parse_tag_after_long_multibyte_run() {
        let run = format!("[{}]", "é".repeat(MAX_TAG_BODY));
        assert_eq!(
            parse(&format!("{run}[b]x")),
            vec![text(&run), Part::Style(StyleKind::Bold, true), text("x")]
        );
    }

    #[test]
    fn test_parse_many_closing_brackets() {
        let input = format!("[{}", "]".repeat(200_000));
        assert_eq!(parse(&input), vec![text(&input)]);
    }

    #[test]
    fn test_parse_tag_after_newline_does_not_see_previous_line() {
        // The newline flushed `[`, so the `]` on the next line has nothing to close
        assert_eq!(parse("[\nb]"), vec![text("["), Part::Newline, text("b]")]);
    }

    #[test]
    fn test_parse_multibyte_text() {
        assert_eq!(
            parse("🦊[b]🇨🇦[/b]"),
            vec![
                text("🦊"),
                Part::Style(StyleKind::Bold, true),
                text("🇨🇦"),
                Part::Style(StyleKind::Bold, false),
            ]
        );
    }

    #[test]
    fn test_markup_round_trip() {
        let inputs = [
            "",
            "plain",
            "[b]hello [i]world[/i][/b]",
            "\\[[b]hello\\[/b]",
            "now [b[url]https://[i]example.com[/url] is \\ wrong here \\ [/i] \\",
            "[url]]teehee[/color ] yea [] ]",
            "line\\\nbreak\n\n[color=#00ff00]g[/color] [:D][D:]",
            "\\\\ \\a [x [b]y [[b]]",
        ];
        for input in inputs {
            assert_eq!(to_markup(&parse(input)), input, "input: {input:?}");
        }
    }

    #[test]
    fn test_parse_never_produces_empty_text() {
        let inputs = ["[b][/b]", "\\\\", "\n\n", "[:)][:(]", "\\[", "]]]"];
        for input in inputs {
            assert!(
                parse(input)
                    .iter()
                    .all(|part| !matches!(part, Part::Text(t) if t.is_empty())),
                "input: {input:?}"
            );
        }
    }
}
