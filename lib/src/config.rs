//! Client configuration for the HeadHunter API.
//!
//! hh.ru rejects requests without an application identification string
//! (sent as `User-Agent`), so [`ClientConfig`] treats it as the one
//! required field and validates it before a client can exist. Everything
//! else has a sensible default.

use std::env;
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use url::Url;

use crate::error::ConfigError;

/// HeadHunter API base URL.
pub const HH_API_BASE_URL: &str = "https://api.hh.ru";

/// The identification format hh.ru expects in the `User-Agent` header.
pub const HH_USER_AGENT_FORMAT: &str = "AppName/Version (contact@example.com)";

/// Environment variable for the application identification string.
pub const HH_USER_AGENT_ENV: &str = "HH_USER_AGENT";

/// Environment variable for the OAuth access token.
pub const HH_ACCESS_TOKEN_ENV: &str = "HH_ACCESS_TOKEN";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for a [`HeadHunterClient`].
///
/// Collects the identification string, optional OAuth token, base URL,
/// timeout, and extra headers, then resolves them into request defaults.
/// Headers merge in a fixed order: protocol defaults first, then the
/// computed `User-Agent` and `Authorization` values, then caller extras.
/// Later stages win per key, so a caller can override any computed value
/// by explicit intent, but never remove identification by omission.
///
/// ## Examples
///
/// ```rust,ignore
/// use headhunter_lib::ClientConfig;
///
/// let config = ClientConfig::new("MyApp/1.0 (admin@myapp.example)")
///     .access_token("oauth-token")
///     .header("HH-User-Site-Id", "42");
/// ```
///
/// [`HeadHunterClient`]: crate::client::HeadHunterClient
#[derive(Debug, Clone)]
pub struct ClientConfig {
    user_agent: String,
    access_token: Option<String>,
    base_url: String,
    timeout: Duration,
    headers: Vec<(String, String)>,
}

impl ClientConfig {
    /// Creates a configuration with the given identification string.
    ///
    /// ## Arguments
    ///
    /// * `user_agent` - Application identification in the format
    ///   `"AppName/Version (contact@example.com)"`.
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            access_token: None,
            base_url: HH_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            headers: Vec::new(),
        }
    }

    /// Creates a configuration from environment variables.
    ///
    /// Reads the identification string from `HH_USER_AGENT` and, when
    /// set and non-blank, an OAuth token from `HH_ACCESS_TOKEN`.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::MissingUserAgent`] if `HH_USER_AGENT` is
    /// unset, empty, or whitespace.
    pub fn from_env() -> Result<Self, ConfigError> {
        let user_agent = env::var(HH_USER_AGENT_ENV).map_err(|_| ConfigError::MissingUserAgent)?;
        if user_agent.trim().is_empty() {
            return Err(ConfigError::MissingUserAgent);
        }

        let mut config = Self::new(user_agent);
        if let Ok(token) = env::var(HH_ACCESS_TOKEN_ENV) {
            if !token.trim().is_empty() {
                config = config.access_token(token);
            }
        }
        Ok(config)
    }

    /// Sets the OAuth access token, sent as `Authorization: Bearer <token>`.
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Sets a custom base URL (e.g. a mirror or a test server).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adds an extra default header to all requests.
    ///
    /// Extras are applied last in the merge, so they override computed
    /// values (including `User-Agent`) when the caller names the same key.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Validates the configuration and resolves it into request defaults.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::MissingUserAgent`] for a blank identification
    /// string, [`ConfigError::InvalidBaseUrl`] for an unparseable base URL,
    /// and [`ConfigError::InvalidHeader`] for a header whose name or value
    /// is not valid HTTP.
    pub(crate) fn resolve(&self) -> Result<ResolvedConfig, ConfigError> {
        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::MissingUserAgent);
        }

        let base_url = Url::parse(&self.base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let user_agent = HeaderValue::try_from(self.user_agent.as_str())
            .map_err(|e| ConfigError::invalid_header("User-Agent", e.to_string()))?;
        headers.insert(USER_AGENT, user_agent);

        if let Some(token) = &self.access_token {
            let bearer = HeaderValue::try_from(format!("Bearer {token}"))
                .map_err(|e| ConfigError::invalid_header("Authorization", e.to_string()))?;
            headers.insert(AUTHORIZATION, bearer);
        }

        for (name, value) in &self.headers {
            let header_name = HeaderName::try_from(name.as_str())
                .map_err(|e| ConfigError::invalid_header(name, e.to_string()))?;
            let header_value = HeaderValue::try_from(value.as_str())
                .map_err(|e| ConfigError::invalid_header(name, e.to_string()))?;
            headers.insert(header_name, header_value);
        }

        Ok(ResolvedConfig {
            base_url,
            timeout: self.timeout,
            headers,
        })
    }
}

/// Request defaults resolved from a validated [`ClientConfig`].
#[derive(Debug, Clone)]
pub(crate) struct ResolvedConfig {
    pub(crate) base_url: Url,
    pub(crate) timeout: Duration,
    pub(crate) headers: HeaderMap,
}
