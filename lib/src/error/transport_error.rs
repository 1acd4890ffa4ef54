//! HTTP transport and status errors.

use thiserror::Error;

/// Errors from the HTTP transport layer.
///
/// These errors represent network-level failures and non-success HTTP
/// statuses. Status codes are passed through uninterpreted: hh.ru uses
/// 403 for captcha challenges and 404 for visibility rules as well as
/// missing resources, so this layer attaches no meaning to them and
/// leaves the decision to the caller.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request URL could not be built from the base URL and path.
    #[error("Invalid request URL: {0}")]
    Url(#[from] url::ParseError),

    /// The request failed before a response arrived (network, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server returned a non-success HTTP status code.
    #[error("HTTP {status}: {body}")]
    Status {
        /// The HTTP status code returned.
        status: u16,
        /// The response body, verbatim.
        body: String,
    },
}

impl TransportError {
    /// Returns `true` if the request timed out.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Request(e) => e.is_timeout(),
            Self::Url(_) | Self::Status { .. } => false,
        }
    }

    /// Returns the HTTP status code if one was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            Self::Url(_) => None,
        }
    }
}
