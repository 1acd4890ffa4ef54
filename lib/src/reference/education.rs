//! Educational institutions.

use serde::{Deserialize, Serialize};

use super::Area;

/// A university or college from `/educational_institutions`.
///
/// The institution embeds its own copy of the region it sits in, taken
/// from the payload at fetch time. That copy is a value, not a pointer
/// into any fetched area tree, and can go stale independently of the
/// canonical `/areas` data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationalInstitution {
    /// Institution id.
    pub id: String,
    /// Full institution name.
    pub name: String,
    /// Short name, when the institution has one.
    pub acronym: Option<String>,
    /// Web site URL, when published.
    pub site: Option<String>,
    /// The region the institution belongs to, embedded by value.
    pub area: Area,
}
