//! Client configuration errors.

use thiserror::Error;

/// Errors in client configuration.
///
/// These errors occur while resolving a [`ClientConfig`] into a usable
/// client, before any request is sent. A config that resolves once never
/// produces them again.
///
/// [`ClientConfig`]: crate::config::ClientConfig
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The required application identification string is missing or blank.
    ///
    /// hh.ru rejects unidentified clients, so construction fails instead.
    #[error("User agent is required for the HeadHunter API. Format: \"AppName/Version (contact@example.com)\"")]
    MissingUserAgent,

    /// The base URL could not be parsed.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// An extra header has an invalid name or value.
    #[error("Invalid header {name:?}: {reason}")]
    InvalidHeader {
        /// The offending header name.
        name: String,
        /// Description of what was wrong with it.
        reason: String,
    },
}

impl ConfigError {
    /// Creates an invalid header error.
    pub fn invalid_header(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHeader {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
