//! The professional role catalog.

use serde::{Deserialize, Serialize};

use super::DictionaryItem;

/// The `/professional_roles` payload: roles grouped into categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessionalRoles {
    /// Role categories, in server order.
    pub categories: Vec<ProfessionalRoleCategory>,
}

impl ProfessionalRoles {
    /// Iterates over every role across all categories.
    pub fn all_roles(&self) -> impl Iterator<Item = &DictionaryItem> {
        self.categories.iter().flat_map(|c| c.roles.iter())
    }
}

/// One category of professional roles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessionalRoleCategory {
    /// Category id.
    pub id: String,
    /// Category name.
    pub name: String,
    /// Roles in this category, in server order.
    #[serde(default)]
    pub roles: Vec<DictionaryItem>,
}
