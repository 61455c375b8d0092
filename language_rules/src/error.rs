//! Error types for the language rules.
//!
//! Comprehension, resolution and learning never fail; only parsing names and
//! loading configuration can.

/// Errors raised while parsing catalog names or loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    /// A language name that is not in the catalog.
    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    /// A cultural background name that is not recognized.
    #[error("unknown cultural background: {0}")]
    UnknownCulturalBackground(String),

    /// The configuration file could not be read.
    #[error("failed to read config file: {0}")]
    ConfigRead(#[from] std::io::Error),

    /// The configuration file is not valid TOML for [`crate::LanguageConfig`].
    #[error("failed to parse config TOML: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A tuning value is non-finite or outside its allowed range.
    #[error("invalid config value {field} = {value}: {reason}")]
    InvalidConfig {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// Result alias for fallible rules operations.
pub type RulesResult<T> = std::result::Result<T, RulesError>;
