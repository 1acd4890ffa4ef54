//! Data model for hh.ru reference entities.
//!
//! Reference ("dictionary") data is the small, rarely-changing lookup
//! material the API serves for filters and display labels:
//! - [`Area`] - the recursive region tree, with [`AreaIndex`] for by-id lookups
//! - [`Industry`] - the recursive industry tree
//! - [`DictionaryItem`] / [`Dictionaries`] - flat enumerated collections
//! - [`MetroStation`] / [`MetroLine`] / [`MetroCity`] - metro geography
//! - [`EducationalInstitution`] - universities and colleges
//! - [`ProfessionalRoles`] - the role catalog, grouped into categories
//!
//! Parsing is purely structural: every fetch produces independent owned
//! values and nothing here caches or shares state between calls.

mod area;
mod dictionary;
mod education;
mod industry;
mod metro;
mod roles;

pub use area::{Area, AreaIndex};
pub use dictionary::{Dictionaries, DictionaryCategory, DictionaryItem};
pub use education::EducationalInstitution;
pub use industry::Industry;
pub use metro::{MetroCity, MetroLine, MetroStation};
pub use roles::{ProfessionalRoleCategory, ProfessionalRoles};

pub(crate) use metro::RawMetroCity;
