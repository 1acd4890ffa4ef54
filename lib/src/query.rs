//! Ordered query-pair composition.
//!
//! hh.ru endpoints take flat `key=value` query strings where repeatable
//! filters appear as repeated keys (`area=1&area=2`), never comma-joined.
//! [`QueryPairs`] accumulates pairs in insertion order and renders them
//! with standard form encoding, so a composed request is reproducible
//! and testable without touching the network.

use std::fmt::Display;

use url::Url;
use url::form_urlencoded::Serializer;

/// An insertion-ordered accumulator of query parameters.
///
/// Composition rules:
/// - Absent (`None`) values produce no pair at all - never an empty
///   string, never a `"null"` literal.
/// - Sequences produce one pair per element, in element order.
/// - Booleans render as the literals `true` / `false`.
/// - Numbers render in plain decimal via their `Display` impl.
/// - Values pass through verbatim; percent-encoding happens at render
///   time and nothing validates enumerated values against an allow-list.
///
/// ## Examples
///
/// ```rust,ignore
/// use headhunter_lib::query::QueryPairs;
///
/// let mut pairs = QueryPairs::new();
/// pairs.push("text", "rust");
/// pairs.push_all("area", ["1", "2"]);
/// pairs.push_opt("page", None::<u32>);
/// assert_eq!(pairs.encode(), "text=rust&area=1&area=2");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPairs {
    pairs: Vec<(String, String)>,
}

impl QueryPairs {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one `key=value` pair.
    pub fn push(&mut self, key: &str, value: impl Display) {
        self.pairs.push((key.to_string(), value.to_string()));
    }

    /// Appends a pair when the value is present; does nothing for `None`.
    pub fn push_opt(&mut self, key: &str, value: Option<impl Display>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Appends one pair per element, preserving element order.
    pub fn push_all<V: Display>(&mut self, key: &str, values: impl IntoIterator<Item = V>) {
        for value in values {
            self.push(key, value);
        }
    }

    /// Returns the accumulated pairs in insertion order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Returns `true` if no pair has been pushed.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the number of accumulated pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Renders the pairs as a form-encoded query string.
    pub fn encode(&self) -> String {
        let mut serializer = Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }

    /// Appends the pairs to a URL's query string.
    ///
    /// A URL without a query stays query-less when the accumulator is
    /// empty; `Url::query_pairs_mut` would otherwise leave a dangling `?`.
    pub fn append_to(&self, url: &mut Url) {
        if self.pairs.is_empty() {
            return;
        }
        let mut query = url.query_pairs_mut();
        for (key, value) in &self.pairs {
            query.append_pair(key, value);
        }
    }
}
