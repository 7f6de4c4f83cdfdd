//! `${VAR}` references in `render.default_scheme` and `emotes.base_path`.
//!
//! Lets one `quill.toml` point emote images at a CDN chosen per deployment
//! (`base_path = "${EMOTE_CDN:-/static}/emoticons"`). A reference to an unset
//! variable without a `:-` fallback fails the whole load and names the field.

use crate::ConfigError;

/// Expand `value` of config `field`.
///
/// Values without `${` skip expansion entirely, so a lone `$` is kept.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, UnsetVar> {
        std::env::var(var).map(Some).map_err(|_| UnsetVar(var.to_owned()))
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })
}

/// Variable referenced by `field` but missing from the environment.
struct UnsetVar(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_simple_var() {
        // SAFETY: each test uses its own variable name
        unsafe {
            std::env::set_var("QUILL_TEST_EMOTES", "/cdn/emotes");
        }
        let result = expand_env("${QUILL_TEST_EMOTES}", "emotes.base_path").unwrap();
        assert_eq!(result, "/cdn/emotes");
        unsafe {
            std::env::remove_var("QUILL_TEST_EMOTES");
        }
    }

    #[test]
    fn test_expand_with_default_uses_value() {
        // SAFETY: each test uses its own variable name
        unsafe {
            std::env::set_var("QUILL_TEST_SCHEME", "http://");
        }
        let result = expand_env("${QUILL_TEST_SCHEME:-https://}", "render.default_scheme").unwrap();
        assert_eq!(result, "http://");
        unsafe {
            std::env::remove_var("QUILL_TEST_SCHEME");
        }
    }

    #[test]
    fn test_expand_with_default_uses_default() {
        // SAFETY: each test uses its own variable name
        unsafe {
            std::env::remove_var("QUILL_TEST_UNSET");
        }
        let result = expand_env("${QUILL_TEST_UNSET:-/static/emoticons}", "emotes.base_path").unwrap();
        assert_eq!(result, "/static/emoticons");
    }

    #[test]
    fn test_expand_missing_var_error() {
        // SAFETY: each test uses its own variable name
        unsafe {
            std::env::remove_var("QUILL_TEST_MISSING");
        }
        let err = expand_env("${QUILL_TEST_MISSING}", "emotes.base_path").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("QUILL_TEST_MISSING"));
        assert!(err.to_string().contains("emotes.base_path"));
    }

    #[test]
    fn test_expand_embedded_var() {
        // SAFETY: each test uses its own variable name
        unsafe {
            std::env::set_var("QUILL_TEST_CDN", "cdn.example.com");
        }
        let result = expand_env("https://${QUILL_TEST_CDN}/emotes", "emotes.base_path").unwrap();
        assert_eq!(result, "https://cdn.example.com/emotes");
        unsafe {
            std::env::remove_var("QUILL_TEST_CDN");
        }
    }

    #[test]
    fn test_expand_fallback_prefix_in_path() {
        // SAFETY: each test uses its own variable name
        unsafe {
            std::env::remove_var("QUILL_TEST_NO_CDN");
        }
        let result = expand_env("${QUILL_TEST_NO_CDN:-/static}/emoticons", "emotes.base_path").unwrap();
        assert_eq!(result, "/static/emoticons");
    }

    #[test]
    fn test_literal_unchanged() {
        assert_eq!(
            expand_env("/static/emoticons", "emotes.base_path").unwrap(),
            "/static/emoticons"
        );
        assert_eq!(expand_env("$HOME/emotes", "emotes.base_path").unwrap(), "$HOME/emotes");
    }
}
