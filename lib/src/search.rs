//! Typed search filters for resource endpoints.
//!
//! Filters mirror the query surface of `GET /vacancies` and
//! `GET /educational_institutions`: every field is optional, repeatable
//! filters are vectors, and enumerated fields stay plain strings that
//! pass through verbatim. The remote service owns validation; this layer
//! only guarantees correct serialization. The documented values for the
//! enumerated fields are available as constants in the [`experience`],
//! [`employment`], [`schedule`], and [`order`] modules.

use serde::Deserialize;

use crate::query::QueryPairs;

/// Documented values for the `experience` filter.
pub mod experience {
    /// No work experience required.
    pub const NO_EXPERIENCE: &str = "noExperience";
    /// Between one and three years.
    pub const BETWEEN_1_AND_3: &str = "between1And3";
    /// Between three and six years.
    pub const BETWEEN_3_AND_6: &str = "between3And6";
    /// More than six years.
    pub const MORE_THAN_6: &str = "moreThan6";
}

/// Documented values for the `employment` filter.
pub mod employment {
    /// Full-time employment.
    pub const FULL: &str = "full";
    /// Part-time employment.
    pub const PART: &str = "part";
    /// Project work.
    pub const PROJECT: &str = "project";
    /// Volunteering.
    pub const VOLUNTEER: &str = "volunteer";
    /// Probation placement.
    pub const PROBATION: &str = "probation";
}

/// Documented values for the `schedule` filter.
pub mod schedule {
    /// Full day on site.
    pub const FULL_DAY: &str = "fullDay";
    /// Shift schedule.
    pub const SHIFT: &str = "shift";
    /// Flexible schedule.
    pub const FLEXIBLE: &str = "flexible";
    /// Remote work.
    pub const REMOTE: &str = "remote";
    /// Fly-in fly-out rotation.
    pub const FLY_IN_FLY_OUT: &str = "flyInFlyOut";
}

/// Documented values for the `order_by` sort field.
pub mod order {
    /// Newest publications first.
    pub const PUBLICATION_TIME: &str = "publication_time";
    /// Highest salary first.
    pub const SALARY_DESC: &str = "salary_desc";
    /// Lowest salary first.
    pub const SALARY_ASC: &str = "salary_asc";
    /// Best text match first.
    pub const RELEVANCE: &str = "relevance";
}

/// Filters and pagination for vacancy search.
///
/// All fields are optional; an unset field is omitted from the request
/// entirely. Repeatable filters (`area`, `professional_role`, `industry`)
/// serialize as repeated keys in element order.
///
/// ## Examples
///
/// ```rust,ignore
/// use headhunter_lib::search::{VacancySearchParams, experience, order};
///
/// let params = VacancySearchParams {
///     text: Some("rust developer".to_string()),
///     area: vec!["1".to_string()],
///     experience: Some(experience::BETWEEN_1_AND_3.to_string()),
///     order_by: Some(order::PUBLICATION_TIME.to_string()),
///     per_page: Some(20),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VacancySearchParams {
    /// Free-text query.
    pub text: Option<String>,
    /// Region ids; repeatable.
    pub area: Vec<String>,
    /// Professional role ids; repeatable.
    pub professional_role: Vec<String>,
    /// Industry ids; repeatable.
    pub industry: Vec<String>,
    /// Experience band (see [`experience`]).
    pub experience: Option<String>,
    /// Employment type (see [`employment`]).
    pub employment: Option<String>,
    /// Work schedule (see [`schedule`]).
    pub schedule: Option<String>,
    /// Restrict to one employer.
    pub employer_id: Option<String>,
    /// Lower salary bound.
    pub salary_from: Option<u32>,
    /// Upper salary bound.
    pub salary_to: Option<u32>,
    /// Salary currency code (`RUR`, `USD`, ...).
    pub currency: Option<String>,
    /// Only vacancies with a published salary.
    pub only_with_salary: Option<bool>,
    /// Only vacancies published at or after this date (ISO 8601).
    pub date_from: Option<String>,
    /// Only vacancies published at or before this date (ISO 8601).
    pub date_to: Option<String>,
    /// Sort order (see [`order`]).
    pub order_by: Option<String>,
    /// Zero-based page number.
    pub page: Option<u32>,
    /// Results per page.
    pub per_page: Option<u32>,
}

impl VacancySearchParams {
    /// Maps the filters onto ordered query pairs.
    pub fn to_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        pairs.push_opt("text", self.text.as_deref());
        pairs.push_all("area", &self.area);
        pairs.push_all("professional_role", &self.professional_role);
        pairs.push_all("industry", &self.industry);
        pairs.push_opt("experience", self.experience.as_deref());
        pairs.push_opt("employment", self.employment.as_deref());
        pairs.push_opt("schedule", self.schedule.as_deref());
        pairs.push_opt("employer_id", self.employer_id.as_deref());
        pairs.push_opt("salary_from", self.salary_from);
        pairs.push_opt("salary_to", self.salary_to);
        pairs.push_opt("currency", self.currency.as_deref());
        pairs.push_opt("only_with_salary", self.only_with_salary);
        pairs.push_opt("date_from", self.date_from.as_deref());
        pairs.push_opt("date_to", self.date_to.as_deref());
        pairs.push_opt("order_by", self.order_by.as_deref());
        pairs.push_opt("page", self.page);
        pairs.push_opt("per_page", self.per_page);
        pairs
    }
}

/// Filters for the educational institutions search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstitutionsQuery {
    /// Region id to search within.
    pub area: Option<String>,
    /// Free-text name query.
    pub text: Option<String>,
}

impl InstitutionsQuery {
    /// Restricts the search to one region.
    pub fn in_area(area: impl Into<String>) -> Self {
        Self {
            area: Some(area.into()),
            text: None,
        }
    }

    /// Maps the filters onto ordered query pairs.
    pub fn to_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        pairs.push_opt("area", self.area.as_deref());
        pairs.push_opt("text", self.text.as_deref());
        pairs
    }
}

/// One page of vacancy search results.
///
/// Vacancy bodies stay untyped JSON: their schema is large and
/// employer-specific, and callers that need typed access drill into the
/// values they use. The paging counters are typed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VacancySearchPage {
    /// Vacancies on this page, as returned.
    pub items: Vec<serde_json::Value>,
    /// Total number of matches.
    pub found: u64,
    /// Total number of pages.
    pub pages: u32,
    /// This page's zero-based number.
    pub page: u32,
    /// Page size used by the server.
    pub per_page: u32,
}
