//! Markup data model.
//!
//! A parsed document is a flat, ordered list of [`Part`]s. Parts never encode
//! nesting: matching opening and closing toggles is left to the consumer.

use std::fmt;

/// Longest tag body (in bytes) worth looking up in the tag tables.
pub(crate) const MAX_TAG_BODY: usize = 32;

/// Toggleable text styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StyleKind {
    /// `[b]`
    Bold,
    /// `[i]`
    Italic,
    /// `[u]`
    Underline,
    /// `[s]`
    Strikethrough,
    /// `[url]`, the link destination is the text inside the link.
    Link,
}

/// Style keyword table, in lookup order.
const STYLE_TAGS: &[(&str, StyleKind)] = &[
    ("b", StyleKind::Bold),
    ("i", StyleKind::Italic),
    ("u", StyleKind::Underline),
    ("s", StyleKind::Strikethrough),
    ("url", StyleKind::Link),
];

impl StyleKind {
    /// Tag keyword without brackets (e.g. `"url"`).
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Bold => "b",
            Self::Italic => "i",
            Self::Underline => "u",
            Self::Strikethrough => "s",
            Self::Link => "url",
        }
    }

    /// Look up a style by its exact keyword.
    #[must_use]
    pub fn from_tag(keyword: &str) -> Option<Self> {
        STYLE_TAGS
            .iter()
            .find(|(tag, _)| *tag == keyword)
            .map(|(_, kind)| *kind)
    }
}

/// Fixed set of emoticons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EmoteKind {
    /// `[:)]`
    Smile,
    /// `[:(]`
    Sad,
    /// `[:D]`
    ColonD,
    /// `[:3]`
    ColonThree,
    /// `[D:]`
    Fearful,
    /// `[B)]`
    Sunglasses,
    /// `[;(]`
    Crying,
    /// `[;)]`
    Winking,
}

/// Emote token table, in lookup order.
const EMOTE_TAGS: &[(&str, EmoteKind)] = &[
    (":)", EmoteKind::Smile),
    (":(", EmoteKind::Sad),
    (":D", EmoteKind::ColonD),
    (":3", EmoteKind::ColonThree),
    ("D:", EmoteKind::Fearful),
    ("B)", EmoteKind::Sunglasses),
    (";(", EmoteKind::Crying),
    (";)", EmoteKind::Winking),
];

impl EmoteKind {
    /// Emote token without brackets (e.g. `":)"`).
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Smile => ":)",
            Self::Sad => ":(",
            Self::ColonD => ":D",
            Self::ColonThree => ":3",
            Self::Fearful => "D:",
            Self::Sunglasses => "B)",
            Self::Crying => ";(",
            Self::Winking => ";)",
        }
    }

    /// Asset name without extension (e.g. `"smile"`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Smile => "smile",
            Self::Sad => "sad",
            Self::ColonD => "colond",
            Self::ColonThree => "colonthree",
            Self::Fearful => "fearful",
            Self::Sunglasses => "sunglasses",
            Self::Crying => "crying",
            Self::Winking => "winking",
        }
    }

    /// Look up an emote by its exact token.
    #[must_use]
    pub fn from_tag(token: &str) -> Option<Self> {
        EMOTE_TAGS
            .iter()
            .find(|(tag, _)| *tag == token)
            .map(|(_, kind)| *kind)
    }
}

/// RGB color with 8-bit channels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Create a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (hex digits are case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use quill_markup::Color;
    ///
    /// assert_eq!(Color::from_hex("#A834cf"), Some(Color::new(168, 52, 207)));
    /// assert_eq!(Color::from_hex("#a834c"), None);
    /// assert_eq!(Color::from_hex("#+f+f+f"), None);
    /// ```
    #[must_use]
    pub fn from_hex(value: &str) -> Option<Self> {
        let digits = value.strip_prefix('#')?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One recognized unit of markup, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Part {
    /// Literal text, never empty.
    Text(String),
    /// The next character was escaped with a backslash.
    Escape,
    /// Hard line break.
    Newline,
    /// Style toggle: `true` opens, `false` closes.
    Style(StyleKind, bool),
    /// Color toggle: `Some` opens a color, `None` closes the innermost one.
    Color(Option<Color>),
    /// Emoticon.
    Emote(EmoteKind),
}

impl Part {
    /// Match a tag body (the text between `[` and `]`) against the tag tables.
    ///
    /// Priority: style keywords, emote tokens, `color=#rrggbb`, `/color`.
    pub(crate) fn from_tag_body(body: &str) -> Option<Self> {
        if body.is_empty() || body.len() > MAX_TAG_BODY {
            return None;
        }

        Self::style_tag(body)
            .or_else(|| EmoteKind::from_tag(body).map(Self::Emote))
            .or_else(|| Self::color_tag(body))
    }

    fn style_tag(body: &str) -> Option<Self> {
        match body.strip_prefix('/') {
            Some(keyword) => StyleKind::from_tag(keyword).map(|kind| Self::Style(kind, false)),
            None => StyleKind::from_tag(body).map(|kind| Self::Style(kind, true)),
        }
    }

    fn color_tag(body: &str) -> Option<Self> {
        if body == "/color" {
            return Some(Self::Color(None));
        }
        let value = body.strip_prefix("color=")?;
        Color::from_hex(value).map(|color| Self::Color(Some(color)))
    }
}

impl fmt::Display for Part {
    /// Serializes the part back to markup source.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Escape => f.write_str("\\"),
            Self::Newline => f.write_str("\n"),
            Self::Style(kind, true) => write!(f, "[{}]", kind.tag()),
            Self::Style(kind, false) => write!(f, "[/{}]", kind.tag()),
            Self::Color(Some(color)) => write!(f, "[color={color}]"),
            Self::Color(None) => f.write_str("[/color]"),
            Self::Emote(kind) => write!(f, "[{}]", kind.tag()),
        }
    }
}

/// Serialize parts back to markup source.
///
/// The tokenizer is lossless, so `to_markup(&parse(s)) == s` for any input
/// whose color tags are written in lowercase hex.
pub fn to_markup(parts: &[Part]) -> String {
    parts.iter().map(ToString::to_string).collect()
}
