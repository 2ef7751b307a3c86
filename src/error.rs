use thiserror::Error;

use crate::i18n::Language;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid backend URL {value:?}: {reason}")]
    InvalidBackendUrl { value: String, reason: String },
    #[error("Invalid request timeout {0:?}: expected a positive number of seconds")]
    InvalidTimeout(String),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unsupported language code: {0:?}")]
    UnsupportedLanguage(String),
    #[error("Localization for {language} is missing fields: {fields:?}")]
    IncompleteEntry {
        language: Language,
        fields: Vec<&'static str>,
    },
}

/// Failures talking to the analysis backend. These never reach the UI as-is;
/// the workflows map them onto a generic, localized indicator.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Backend responded with status {0}")]
    Status(u16),
    #[error("Malformed response body: {0}")]
    Malformed(String),
    #[error("Analysis service reported an error: {0}")]
    ServiceReported(String),
}
