//! Typed async client for the HeadHunter (hh.ru) job board API.
//!
//! The `headhunter-lib` crate covers the public reference endpoints of
//! `api.hh.ru` with one async method per resource and a typed model for
//! each payload.
//!
//! ## Features
//!
//! - **Validated configuration**: hh.ru requires an application
//!   identification string on every request; [`ClientConfig`] refuses to
//!   produce a client without one
//! - **Reference catalogs**: region and industry trees, dictionaries,
//!   metro networks, educational institutions, professional roles
//! - **Vacancy search**: typed filters serialized with repeated keys and
//!   omitted absences, the way the API expects them
//! - **Layered error handling**: configuration, transport, and parsing
//!   failures stay in separate categories, and HTTP statuses pass
//!   through uninterpreted
//!
//! ## Example
//!
//! ```rust,ignore
//! use headhunter_lib::{ClientConfig, HeadHunterClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HeadHunterClient::new(
//!         ClientConfig::new("MyApp/1.0 (admin@myapp.example)"),
//!     )?;
//!
//!     for area in client.areas().await? {
//!         println!("{} ({})", area.name, area.id);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod query;
pub mod reference;
pub mod search;

// Re-exports for convenience
pub use client::HeadHunterClient;
pub use config::ClientConfig;
pub use error::{ApiError, ConfigError, ParseError, TransportError};
pub use query::QueryPairs;
pub use reference::{
    Area, AreaIndex, Dictionaries, DictionaryCategory, DictionaryItem, EducationalInstitution,
    Industry, MetroCity, MetroLine, MetroStation, ProfessionalRoleCategory, ProfessionalRoles,
};
pub use search::{InstitutionsQuery, VacancySearchPage, VacancySearchParams};
