//! Renderer options.

use quill_markup::EmoteKind;

/// Options controlling rendered output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Echo source tokens (`[b]`, `\`, ...) next to their effect.
    pub editor: bool,
    /// URL path prefix for emote images.
    pub emote_base_path: String,
    /// File extension of emote images.
    pub emote_extension: String,
    /// Prefix for link destinations without an `http://` or `https://` scheme.
    pub default_scheme: String,
    /// Class of the editor marker wrapper.
    pub marker_class: String,
    /// Class of emote images and editor emote markers.
    pub emote_class: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            editor: false,
            emote_base_path: "/static/emoticons".to_owned(),
            emote_extension: "png".to_owned(),
            default_scheme: "https://".to_owned(),
            marker_class: "quill-meta".to_owned(),
            emote_class: "quill-emote".to_owned(),
        }
    }
}

impl RenderOptions {
    /// Image path of an emote (e.g. `/static/emoticons/smile.png`).
    #[must_use]
    pub fn emote_src(&self, kind: EmoteKind) -> String {
        format!(
            "{}/{}.{}",
            self.emote_base_path.trim_end_matches('/'),
            kind.name(),
            self.emote_extension
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emote_src_default() {
        let options = RenderOptions::default();
        assert_eq!(
            options.emote_src(EmoteKind::ColonThree),
            "/static/emoticons/colonthree.png"
        );
    }

    #[test]
    fn test_emote_src_trailing_slash() {
        let options = RenderOptions {
            emote_base_path: "https://cdn.example.com/emotes/".to_owned(),
            emote_extension: "webp".to_owned(),
            ..Default::default()
        };
        assert_eq!(
            options.emote_src(EmoteKind::Winking),
            "https://cdn.example.com/emotes/winking.webp"
        );
    }
}
