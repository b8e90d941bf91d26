use std::path::PathBuf;

use thiserror::Error;

/// Rejected joke table. Only custom tables can fail this way; the builtin
/// table is valid by construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("fallback language '{0}' has no jokes")]
    MissingFallback(String),
    #[error("language '{0}' has an empty joke list")]
    EmptyLanguage(String),
    #[error("language code must not be blank")]
    BlankLanguageCode,
    #[error("joke #{index} for language '{language}' has a blank {field}")]
    BlankField {
        language: String,
        index: usize,
        field: &'static str,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse '{}': {message}", path.display())]
    Parse { path: PathBuf, message: String },
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
    #[error(transparent)]
    Table(#[from] TableError),
}

impl ConfigError {
    pub fn invalid_value(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            message: message.into(),
        }
    }
}
