//! Response decoding and shape errors.

use thiserror::Error;

/// Errors while decoding a response body into typed values.
///
/// These errors mean the server answered successfully but the body does
/// not match the expected shape. A missing dictionary category is *not*
/// one of them: lookups of absent categories return empty results, never
/// an error.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed or the document shape did not match.
    #[error("Failed to parse JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// A metro line color was not a six-digit hex value.
    #[error("Invalid metro line color {value:?}: expected six hex digits")]
    InvalidHexColor {
        /// The color string as received.
        value: String,
    },

    /// The same area id appeared twice while indexing an area tree.
    #[error("Duplicate area id {id:?} in area tree")]
    DuplicateAreaId {
        /// The id that appeared under two parents.
        id: String,
    },
}
