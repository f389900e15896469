//! Configuration management for the bookadoc AsciiDoc backend.
//!
//! The backend is configured through the `[output.asciidoc]` table of
//! `book.toml`, which the pipeline forwards as JSON inside the render
//! context:
//!
//! ```toml
//! [output.asciidoc]
//! min-heading-level = 2
//! ```
//!
//! CLI settings can be applied during load via [`CliSettings`].

use serde::Deserialize;

/// Highest heading level Markdown can express.
const MAX_HEADING_LEVEL: u8 = 6;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override minimum heading level.
    pub min_heading_level: Option<u8>,
}

/// Backend configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Headings below this level, and everything nested in them, are
    /// left out of the output. `0` disables filtering.
    #[serde(alias = "minHeadingLevel")]
    pub min_heading_level: u8,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON deserialization error.
    #[error("Invalid [output.asciidoc] table: {0}")]
    Parse(#[from] serde_json::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl Config {
    /// Load configuration from the backend's output table with optional CLI settings.
    ///
    /// A missing table yields the default configuration. CLI settings are
    /// applied after parsing, so they take precedence over `book.toml`.
    ///
    /// # Errors
    ///
    /// Returns error if the table cannot be deserialized or fails validation.
    pub fn load(
        table: Option<&serde_json::Value>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = match table {
            Some(value) => Self::deserialize(value)?,
            None => Self::default(),
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(level) = settings.min_heading_level {
            self.min_heading_level = level;
        }
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_heading_level > MAX_HEADING_LEVEL {
            return Err(ConfigError::Validation(format!(
                "min-heading-level must be between 0 and {MAX_HEADING_LEVEL}, got {}",
                self.min_heading_level
            )));
        }
        Ok(())
    }

    /// Whether a Markdown heading of the given level is kept in the output.
    #[must_use]
    pub fn keeps_heading(&self, level: u8) -> bool {
        self.min_heading_level == 0 || level >= self.min_heading_level
    }
}
