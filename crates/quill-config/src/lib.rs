//! Configuration management for Quill.
//!
//! Parses `quill.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `render.default_scheme`
//! - `emotes.base_path`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override editor mode.
    pub editor: Option<bool>,
    /// Override the visible length limit.
    pub max_length: Option<usize>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "quill.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rendering configuration.
    pub render: RenderConfig,
    /// Emote image configuration.
    pub emotes: EmotesConfig,
    /// Length limits.
    pub limits: LimitsConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Rendering configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Echo markup tokens in the output.
    pub editor: bool,
    /// Scheme prepended to link destinations without `http://` or `https://`.
    pub default_scheme: String,
    /// CSS class of editor markers.
    pub marker_class: String,
    /// CSS class of emotes.
    pub emote_class: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            editor: false,
            default_scheme: "https://".to_owned(),
            marker_class: "quill-meta".to_owned(),
            emote_class: "quill-emote".to_owned(),
        }
    }
}

/// Emote image configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct EmotesConfig {
    /// URL path prefix of emote images.
    pub base_path: String,
    /// Emote image file extension.
    pub extension: String,
}

impl Default for EmotesConfig {
    fn default() -> Self {
        Self {
            base_path: "/static/emoticons".to_owned(),
            extension: "png".to_owned(),
        }
    }
}

/// Length limits.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum visible length of a message, unlimited if unset.
    pub max_length: Option<usize>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`emotes.base_path`").
        field: String,
        /// Error message (e.g., "${`EMOTE_CDN`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a CSS class name made of ASCII alphanumerics, hyphens and underscores.
fn require_class_name(value: &str, field: &str) -> Result<(), ConfigError> {
    require_non_empty(value, field)?;
    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ConfigError::Validation(format!(
            "{field} may only contain ASCII letters, digits, '-' and '_'"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `quill.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(editor) = settings.editor {
            self.render.editor = editor;
        }
        if let Some(max_length) = settings.max_length {
            self.limits.max_length = Some(max_length);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and after applying CLI
    /// settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_render()?;
        self.validate_emotes()?;
        self.validate_limits()?;
        Ok(())
    }

    fn validate_render(&self) -> Result<(), ConfigError> {
        let scheme = &self.render.default_scheme;
        require_non_empty(scheme, "render.default_scheme")?;
        if !scheme.ends_with(':') && !scheme.ends_with("://") {
            return Err(ConfigError::Validation(
                "render.default_scheme must end with ':' or '://'".to_owned(),
            ));
        }
        require_class_name(&self.render.marker_class, "render.marker_class")?;
        require_class_name(&self.render.emote_class, "render.emote_class")?;
        Ok(())
    }

    fn validate_emotes(&self) -> Result<(), ConfigError> {
        let extension = &self.emotes.extension;
        require_non_empty(extension, "emotes.extension")?;
        if !extension.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::Validation(
                "emotes.extension may only contain ASCII letters and digits".to_owned(),
            ));
        }
        Ok(())
    }

    fn validate_limits(&self) -> Result<(), ConfigError> {
        if self.limits.max_length == Some(0) {
            return Err(ConfigError::Validation(
                "limits.max_length must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.render.default_scheme =
            expand::expand_env(&self.render.default_scheme, "render.default_scheme")?;
        self.emotes.base_path = expand::expand_env(&self.emotes.base_path, "emotes.base_path")?;
        Ok(())
    }
}
