//! The recursive industry tree.

use serde::{Deserialize, Serialize};

/// An industry in the hh.ru industry catalog.
///
/// Industries form a shallow tree (sectors with sub-industries), with
/// children carried in an `industries` field rather than `areas` and no
/// parent back-reference. As with areas, an absent children field and
/// an explicit empty array parse to the same value, and child order is
/// server order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Industry {
    /// Industry id (sub-industries use dotted ids, e.g. `"7.540"`).
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Sub-industries, in server order.
    #[serde(default)]
    pub industries: Vec<Industry>,
}

impl Industry {
    /// Returns `true` if this industry has no sub-industries.
    pub fn is_leaf(&self) -> bool {
        self.industries.is_empty()
    }
}
