//! Flat enumerated reference collections.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// One entry of an enumerated reference collection.
///
/// Every flat reference list (languages, skills, dictionary categories)
/// reduces to this shape. The currency category identifies entries by
/// `code` instead of `id` on the wire; the alias folds that back into
/// `id`. A few id-only categories omit `name`, which then parses as an
/// empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryItem {
    /// Stable identifier, passed back to the API in filters.
    #[serde(alias = "code")]
    pub id: String,
    /// Human-readable label.
    #[serde(default)]
    pub name: String,
}

/// Well-known `/dictionaries` category keys.
///
/// The dictionary payload is an open map and unknown keys stay
/// accessible by string; this enum names the categories the client
/// exposes derived accessors for.
///
/// ## Examples
///
/// ```rust
/// use headhunter_lib::reference::DictionaryCategory;
///
/// assert_eq!(DictionaryCategory::EducationLevel.key(), "education_level");
/// assert_eq!("currency".parse::<DictionaryCategory>().unwrap(), DictionaryCategory::Currency);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum DictionaryCategory {
    /// Salary currencies.
    Currency,
    /// Employment types.
    Employment,
    /// Work schedules.
    Schedule,
    /// Experience bands.
    Experience,
    /// Education levels.
    EducationLevel,
}

impl DictionaryCategory {
    /// The category's key in the dictionary payload.
    pub fn key(self) -> &'static str {
        match self {
            Self::Currency => "currency",
            Self::Employment => "employment",
            Self::Schedule => "schedule",
            Self::Experience => "experience",
            Self::EducationLevel => "education_level",
        }
    }
}

/// The full `/dictionaries` payload.
///
/// An open map from string category keys to ordered entry sequences.
/// Unknown category keys are preserved verbatim at parse time, and
/// looking up a key the payload lacks yields an explicit absent result,
/// never an error. An empty sequence under a present key is distinct
/// from an absent key; [`Dictionaries::items`] collapses the two when
/// the caller does not care.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionaries {
    categories: HashMap<String, Vec<DictionaryItem>>,
}

impl Dictionaries {
    /// Looks up a category, distinguishing absent from empty.
    pub fn get(&self, category: &str) -> Option<&[DictionaryItem]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    /// Returns a category's entries, or an empty slice when absent.
    pub fn items(&self, category: &str) -> &[DictionaryItem] {
        self.get(category).unwrap_or(&[])
    }

    /// Removes and returns a category's entries, empty when absent.
    pub fn take_items(&mut self, category: &str) -> Vec<DictionaryItem> {
        self.categories.remove(category).unwrap_or_default()
    }

    /// Returns `true` if the payload carried the category key.
    pub fn contains(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    /// Iterates over the category keys present in the payload.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Number of categories in the payload.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns `true` if the payload had no categories at all.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
