//! Layered error types for the HeadHunter client.
//!
//! This module provides a structured error hierarchy:
//! - [`ApiError`] - Top-level error type for all client operations
//! - [`ConfigError`] - Client configuration errors, fatal at construction
//! - [`TransportError`] - Network failures and non-success HTTP statuses
//! - [`ParseError`] - Response decoding and shape errors
//!
//! Every error surfaces to the caller via `Result`. The client never
//! retries, never swallows, and never reinterprets a failure category.

mod api_error;
mod config_error;
mod parse_error;
mod transport_error;

pub use api_error::ApiError;
pub use config_error::ConfigError;
pub use parse_error::ParseError;
pub use transport_error::TransportError;
