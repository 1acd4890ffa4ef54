//! Top-level API error type.

use super::{ConfigError, ParseError, TransportError};
use thiserror::Error;

/// Top-level error type for all HeadHunter client operations.
///
/// This enum aggregates all error categories, enabling unified error handling
/// while preserving the ability to match on specific error types when needed.
///
/// ## Examples
///
/// ```rust,ignore
/// use headhunter_lib::error::ApiError;
///
/// fn handle_error(err: ApiError) {
///     match err {
///         ApiError::Config(e) => eprintln!("Bad configuration: {e}"),
///         ApiError::Transport(e) => eprintln!("Request failed: {e}"),
///         ApiError::Parse(e) => eprintln!("Unexpected response: {e}"),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client configuration errors (missing user agent, bad base URL).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Transport errors (network failure, timeout, non-success status).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Response parsing errors (JSON shape mismatch, invalid field values).
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl ApiError {
    /// Returns the HTTP status code if this error carries one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Transport(e) => e.status_code(),
            _ => None,
        }
    }
}
