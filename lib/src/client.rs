//! Request execution against the HeadHunter API.
//!
//! This module provides the [`HeadHunterClient`] struct: one async
//! method per logical resource, each composing a GET request from typed
//! inputs, executing it over a shared `reqwest::Client`, and parsing
//! the response into the reference model.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{Span, debug, instrument};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ApiError, ParseError, TransportError};
use crate::query::QueryPairs;
use crate::reference::{
    Area, Dictionaries, DictionaryCategory, DictionaryItem, EducationalInstitution, Industry,
    MetroCity, MetroStation, ProfessionalRoles, RawMetroCity,
};
use crate::search::{InstitutionsQuery, VacancySearchPage, VacancySearchParams};

/// Paging envelope used by list endpoints that wrap results in `items`.
#[derive(Debug, Deserialize)]
struct ItemsPage<T> {
    items: Vec<T>,
}

/// Async client for the HeadHunter REST API.
///
/// Wraps a pooled `reqwest::Client` configured from a validated
/// [`ClientConfig`]. Every operation is an independent, stateless
/// request/response call: nothing is cached, retried, or batched, and
/// any number of calls may be in flight concurrently. Errors surface
/// unchanged through [`ApiError`]; in particular, HTTP status codes are
/// passed through without interpretation.
///
/// ## Examples
///
/// ```rust,ignore
/// use headhunter_lib::{ClientConfig, HeadHunterClient};
///
/// let client = HeadHunterClient::new(
///     ClientConfig::new("MyApp/1.0 (admin@myapp.example)"),
/// )?;
///
/// let areas = client.areas().await?;
/// println!("{} top-level areas", areas.len());
/// ```
#[derive(Debug)]
pub struct HeadHunterClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HeadHunterClient {
    /// Creates a client from the given configuration.
    ///
    /// Validation and header merging happen here, before any request
    /// can exist: a config without an identification string never
    /// reaches the network.
    ///
    /// ## Errors
    ///
    /// Returns a [`ConfigError`](crate::error::ConfigError) for a
    /// missing user agent, an unparseable base URL, or an invalid extra
    /// header, and a [`TransportError`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let resolved = config.resolve()?;

        let client = reqwest::Client::builder()
            .timeout(resolved.timeout)
            .default_headers(resolved.headers)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(TransportError::Request)?;

        Ok(Self {
            client,
            base_url: resolved.base_url,
        })
    }

    /// Creates a client from the `HH_USER_AGENT` / `HH_ACCESS_TOKEN`
    /// environment variables.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::MissingUserAgent`](crate::error::ConfigError::MissingUserAgent)
    /// if `HH_USER_AGENT` is unset or blank.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Returns the base URL this client sends requests to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetches the full region tree.
    pub async fn areas(&self) -> Result<Vec<Area>, ApiError> {
        self.get_json("/areas", &QueryPairs::new()).await
    }

    /// Fetches one region subtree by id.
    pub async fn area(&self, area_id: &str) -> Result<Area, ApiError> {
        self.get_json(&format!("/areas/{area_id}"), &QueryPairs::new())
            .await
    }

    /// Fetches the professional role catalog.
    pub async fn professional_roles(&self) -> Result<ProfessionalRoles, ApiError> {
        self.get_json("/professional_roles", &QueryPairs::new())
            .await
    }

    /// Fetches the language reference list.
    pub async fn languages(&self) -> Result<Vec<DictionaryItem>, ApiError> {
        self.get_json("/languages", &QueryPairs::new()).await
    }

    /// Fetches the industry tree.
    pub async fn industries(&self) -> Result<Vec<Industry>, ApiError> {
        self.get_json("/industries", &QueryPairs::new()).await
    }

    /// Fetches the key skills reference list.
    pub async fn skills(&self) -> Result<Vec<DictionaryItem>, ApiError> {
        let page: ItemsPage<DictionaryItem> =
            self.get_json("/skills", &QueryPairs::new()).await?;
        Ok(page.items)
    }

    /// Fetches one city's metro stations, flattened out of their lines.
    ///
    /// Each returned station owns a copy of its line, with the line
    /// color validated and normalized during parsing.
    pub async fn metro_stations(&self, city_id: &str) -> Result<Vec<MetroStation>, ApiError> {
        let raw: RawMetroCity = self
            .get_json(&format!("/metro/{city_id}"), &QueryPairs::new())
            .await?;
        let city: MetroCity = raw.try_into().map_err(ApiError::Parse)?;
        Ok(city.stations)
    }

    /// Fetches the metro networks of every covered city.
    pub async fn metro(&self) -> Result<Vec<MetroCity>, ApiError> {
        let raw: Vec<RawMetroCity> = self.get_json("/metro", &QueryPairs::new()).await?;
        raw.into_iter()
            .map(|city| city.try_into().map_err(ApiError::Parse))
            .collect()
    }

    /// Searches educational institutions by region and/or name.
    ///
    /// Absent filter fields are omitted from the request entirely.
    pub async fn educational_institutions(
        &self,
        query: &InstitutionsQuery,
    ) -> Result<Vec<EducationalInstitution>, ApiError> {
        let page: ItemsPage<EducationalInstitution> = self
            .get_json("/educational_institutions", &query.to_pairs())
            .await?;
        Ok(page.items)
    }

    /// Fetches the faculty list of one educational institution.
    pub async fn faculties(&self, institution_id: &str) -> Result<Vec<DictionaryItem>, ApiError> {
        let page: ItemsPage<DictionaryItem> = self
            .get_json(
                &format!("/educational_institutions/{institution_id}/faculties"),
                &QueryPairs::new(),
            )
            .await?;
        Ok(page.items)
    }

    /// Fetches the full dictionaries payload.
    ///
    /// The payload is an open map; categories this client does not know
    /// about are preserved and reachable by their string key.
    pub async fn dictionaries(&self) -> Result<Dictionaries, ApiError> {
        self.get_json("/dictionaries", &QueryPairs::new()).await
    }

    /// Fetches the salary currency list.
    ///
    /// This and the other single-category accessors fetch the full
    /// dictionaries payload and project one category out of it. A
    /// payload without the category yields an empty vector, not an
    /// error.
    pub async fn currencies(&self) -> Result<Vec<DictionaryItem>, ApiError> {
        self.dictionary_category(DictionaryCategory::Currency).await
    }

    /// Fetches the employment type list.
    pub async fn employment_types(&self) -> Result<Vec<DictionaryItem>, ApiError> {
        self.dictionary_category(DictionaryCategory::Employment)
            .await
    }

    /// Fetches the work schedule list.
    pub async fn schedules(&self) -> Result<Vec<DictionaryItem>, ApiError> {
        self.dictionary_category(DictionaryCategory::Schedule).await
    }

    /// Fetches the experience band list.
    pub async fn experience_levels(&self) -> Result<Vec<DictionaryItem>, ApiError> {
        self.dictionary_category(DictionaryCategory::Experience)
            .await
    }

    /// Fetches the education level list.
    pub async fn education_levels(&self) -> Result<Vec<DictionaryItem>, ApiError> {
        self.dictionary_category(DictionaryCategory::EducationLevel)
            .await
    }

    /// Searches vacancies with the given filters.
    ///
    /// Filter serialization follows the query composition rules:
    /// absent fields are omitted, repeatable filters repeat their key,
    /// and enumerated values pass through verbatim.
    pub async fn search_vacancies(
        &self,
        params: &VacancySearchParams,
    ) -> Result<VacancySearchPage, ApiError> {
        self.get_json("/vacancies", &params.to_pairs()).await
    }

    /// Performs a GET against an arbitrary API path.
    ///
    /// The escape hatch for endpoints without a typed method (vacancy
    /// details, resumes, negotiations). The path is joined onto the
    /// base URL and the parameters are appended in order.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// let vacancy = client.get_raw("/vacancies/93353083", &[]).await?;
    /// println!("{}", vacancy["name"]);
    /// ```
    pub async fn get_raw(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<serde_json::Value, ApiError> {
        let mut pairs = QueryPairs::new();
        for (key, value) in params.iter().copied() {
            pairs.push(key, value);
        }
        self.get_json(path, &pairs).await
    }

    /// Fetches the dictionaries payload and projects one category.
    async fn dictionary_category(
        &self,
        category: DictionaryCategory,
    ) -> Result<Vec<DictionaryItem>, ApiError> {
        let mut dictionaries = self.dictionaries().await?;
        Ok(dictionaries.take_items(category.key()))
    }

    /// Executes one GET request and parses the JSON response.
    ///
    /// Transport and decode failures stay in separate error categories:
    /// the body is read as bytes first, so a shape mismatch surfaces as
    /// a [`ParseError`] instead of disappearing into a transport error.
    #[instrument(
        name = "hh_request",
        skip(self, pairs),
        fields(
            http.method = "GET",
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    async fn get_json<T>(&self, path: &str, pairs: &QueryPairs) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let mut url = self.base_url.join(path).map_err(TransportError::Url)?;
        pairs.append_to(&mut url);
        Span::current().record("http.url", url.as_str());

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(TransportError::Request)?;

        let status = response.status();
        let status_code = status.as_u16();
        Span::current().record("http.status_code", status_code);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| status.to_string());

            let otel_status = if status.is_server_error() {
                "ERROR"
            } else {
                "UNSET"
            };
            Span::current().record("otel.status_code", otel_status);

            return Err(TransportError::Status {
                status: status_code,
                body,
            }
            .into());
        }

        Span::current().record("otel.status_code", "OK");

        let body = response.bytes().await.map_err(TransportError::Request)?;
        let parsed = serde_json::from_slice(&body).map_err(ParseError::Json)?;

        debug!(status = status_code, "request completed");
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TEST_UA: &str = "Test/1.0 (a@b.com)";

    fn test_client(server: &MockServer) -> HeadHunterClient {
        HeadHunterClient::new(ClientConfig::new(TEST_UA).base_url(server.uri())).unwrap()
    }

    #[test]
    fn test_missing_user_agent_fails_before_any_request() {
        let result = HeadHunterClient::new(ClientConfig::new(""));
        assert!(matches!(
            result,
            Err(ApiError::Config(ConfigError::MissingUserAgent))
        ));

        let result = HeadHunterClient::new(ClientConfig::new("   "));
        assert!(matches!(
            result,
            Err(ApiError::Config(ConfigError::MissingUserAgent))
        ));
    }

    #[test]
    #[serial_test::serial]
    fn test_from_env_builds_client() {
        unsafe {
            std::env::set_var(crate::config::HH_USER_AGENT_ENV, TEST_UA);
            std::env::remove_var(crate::config::HH_ACCESS_TOKEN_ENV);
        }

        let client = HeadHunterClient::from_env().unwrap();
        assert_eq!(client.base_url().as_str(), "https://api.hh.ru/");

        unsafe { std::env::remove_var(crate::config::HH_USER_AGENT_ENV) };
    }

    #[tokio::test]
    async fn test_user_agent_sent_on_every_request() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/areas"))
            .and(header("user-agent", TEST_UA))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/languages"))
            .and(header("user-agent", TEST_UA))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        // Requests without the identification header would not match
        // the mocks and both calls would fail with a 404.
        client.areas().await.unwrap();
        client.languages().await.unwrap();
    }

    #[tokio::test]
    async fn test_area_moscow_end_to_end() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/areas/1"))
            .and(header("user-agent", TEST_UA))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "1",
                "name": "Moscow",
                "areas": []
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        let area = client.area("1").await.unwrap();

        assert_eq!(
            area,
            Area {
                id: "1".to_string(),
                name: "Moscow".to_string(),
                parent_id: None,
                areas: vec![],
            }
        );
    }

    #[tokio::test]
    async fn test_areas_preserve_child_order() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/areas"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {
                    "id": "113",
                    "name": "Russia",
                    "areas": [
                        {"id": "1", "name": "Moscow"},
                        {"id": "2", "name": "Saint Petersburg"},
                        {"id": "3", "name": "Yekaterinburg"}
                    ]
                }
            ])))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        let areas = client.areas().await.unwrap();

        let children: Vec<&str> = areas[0].areas.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(children, ["1", "2", "3"]);
    }

    #[tokio::test]
    async fn test_bearer_token_sent_when_configured() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/areas"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        let client = HeadHunterClient::new(
            ClientConfig::new(TEST_UA)
                .access_token("test-token")
                .base_url(mock_server.uri()),
        )
        .unwrap();

        client.areas().await.unwrap();
    }

    #[tokio::test]
    async fn test_extra_header_overrides_user_agent() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/areas"))
            .and(header("user-agent", "Override/2.0 (x@y.example)"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        let client = HeadHunterClient::new(
            ClientConfig::new(TEST_UA)
                .header("User-Agent", "Override/2.0 (x@y.example)")
                .base_url(mock_server.uri()),
        )
        .unwrap();

        client.areas().await.unwrap();
    }

    #[tokio::test]
    async fn test_status_passes_through_uninterpreted() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/vacancies"))
            .respond_with(ResponseTemplate::new(403).set_body_string("captcha_required"))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        let result = client.search_vacancies(&VacancySearchParams::default()).await;

        // 403 means captcha as often as it means permissions on hh.ru,
        // so it must stay a plain status, not an auth interpretation.
        match result {
            Err(ApiError::Transport(TransportError::Status { status, body })) => {
                assert_eq!(status, 403);
                assert_eq!(body, "captcha_required");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_server_error_passes_through() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/areas"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        let result = client.areas().await;

        assert!(matches!(
            result,
            Err(ApiError::Transport(TransportError::Status { status: 500, .. }))
        ));
    }

    #[tokio::test]
    async fn test_malformed_json_is_parse_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/areas"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        let result = client.areas().await;

        assert!(matches!(
            result,
            Err(ApiError::Parse(ParseError::Json(_)))
        ));
    }

    #[tokio::test]
    async fn test_derived_accessors_project_categories() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/dictionaries"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "currency": [
                    {"code": "RUR", "name": "Rubles"},
                    {"code": "USD", "name": "Dollars"}
                ],
                "employment": [
                    {"id": "full", "name": "Full time"}
                ]
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);

        let currencies = client.currencies().await.unwrap();
        let ids: Vec<&str> = currencies.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["RUR", "USD"]);

        let employment = client.employment_types().await.unwrap();
        assert_eq!(employment[0].name, "Full time");
    }

    #[tokio::test]
    async fn test_missing_category_yields_empty_vec() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/dictionaries"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "currency": [{"code": "RUR", "name": "Rubles"}]
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);

        let education_levels = client.education_levels().await.unwrap();
        assert!(education_levels.is_empty());

        let schedules = client.schedules().await.unwrap();
        assert!(schedules.is_empty());
    }

    #[tokio::test]
    async fn test_educational_institutions_query_is_exact() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/educational_institutions"))
            .and(query_param("area", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": [
                    {
                        "id": "39420",
                        "name": "Moscow State University",
                        "acronym": "MSU",
                        "site": "https://www.msu.ru",
                        "area": {"id": "1", "name": "Moscow"}
                    }
                ],
                "found": 1
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        let institutions = client
            .educational_institutions(&InstitutionsQuery::in_area("1"))
            .await
            .unwrap();

        assert_eq!(institutions.len(), 1);
        assert_eq!(institutions[0].acronym.as_deref(), Some("MSU"));

        // The unset text filter must not appear in the query at all.
        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url.query(), Some("area=1"));
    }

    #[tokio::test]
    async fn test_search_vacancies_repeats_sequence_keys() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/vacancies"))
            .and(query_param("text", "rust"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": [{"id": "93353083", "name": "Rust Engineer"}],
                "found": 1,
                "pages": 1,
                "page": 0,
                "per_page": 20
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        let params = VacancySearchParams {
            text: Some("rust".to_string()),
            area: vec!["1".to_string(), "2".to_string()],
            ..Default::default()
        };

        let page = client.search_vacancies(&params).await.unwrap();
        assert_eq!(page.found, 1);
        assert_eq!(page.items[0]["name"], "Rust Engineer");

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), Some("text=rust&area=1&area=2"));
    }

    #[tokio::test]
    async fn test_metro_stations_flattened_with_lines() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/metro/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "1",
                "name": "Moscow",
                "lines": [
                    {
                        "id": "1",
                        "name": "Sokolnicheskaya",
                        "hex_color": "#d6083b",
                        "stations": [
                            {"id": "1.544", "name": "Bulvar Rokossovskogo",
                             "lat": 55.814916, "lng": 37.734914, "order": 0}
                        ]
                    }
                ]
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        let stations = client.metro_stations("1").await.unwrap();

        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].name, "Bulvar Rokossovskogo");
        assert_eq!(stations[0].line.hex_color, "D6083B");
    }

    #[tokio::test]
    async fn test_metro_lists_all_cities() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/metro"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {
                    "id": "1",
                    "name": "Moscow",
                    "lines": [
                        {"id": "1", "name": "Sokolnicheskaya", "hex_color": "D6083B",
                         "stations": [
                             {"id": "1.544", "name": "Bulvar Rokossovskogo",
                              "lat": 55.814916, "lng": 37.734914, "order": 0}
                         ]}
                    ]
                },
                {"id": "16", "name": "Nizhny Novgorod", "lines": []}
            ])))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        let cities = client.metro().await.unwrap();

        assert_eq!(cities.len(), 2);
        assert_eq!(cities[0].stations.len(), 1);
        assert!(cities[1].stations.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_metro_color_is_parse_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/metro/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "1",
                "name": "Moscow",
                "lines": [
                    {"id": "1", "name": "Broken", "hex_color": "red", "stations": []}
                ]
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        let result = client.metro_stations("1").await;

        assert!(matches!(
            result,
            Err(ApiError::Parse(ParseError::InvalidHexColor { .. }))
        ));
    }

    #[tokio::test]
    async fn test_skills_unwraps_items_envelope() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/skills"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": [
                    {"id": "1017", "name": "Rust"},
                    {"id": "1018", "name": "Tokio"}
                ]
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        let skills = client.skills().await.unwrap();

        assert_eq!(skills.len(), 2);
        assert_eq!(skills[0].name, "Rust");
    }

    #[tokio::test]
    async fn test_faculties_path_and_shape() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/educational_institutions/39420/faculties"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": [
                    {"id": "123", "name": "Computer Science"}
                ]
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        let faculties = client.faculties("39420").await.unwrap();

        assert_eq!(faculties[0].name, "Computer Science");
    }

    #[tokio::test]
    async fn test_professional_roles_grouped() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/professional_roles"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "categories": [
                    {
                        "id": "11",
                        "name": "IT",
                        "roles": [{"id": "96", "name": "Developer"}]
                    }
                ]
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        let roles = client.professional_roles().await.unwrap();

        assert_eq!(roles.categories[0].name, "IT");
        assert_eq!(roles.all_roles().count(), 1);
    }

    #[tokio::test]
    async fn test_languages_list() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/languages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "eng", "name": "English"},
                {"id": "rus", "name": "Russian"}
            ])))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        let languages = client.languages().await.unwrap();

        assert_eq!(languages.len(), 2);
        assert_eq!(languages[0].id, "eng");
    }

    #[tokio::test]
    async fn test_industries_nested() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/industries"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {
                    "id": "7",
                    "name": "Media",
                    "industries": [{"id": "7.540", "name": "Broadcasting"}]
                }
            ])))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        let industries = client.industries().await.unwrap();

        assert_eq!(industries[0].industries[0].id, "7.540");
    }

    #[tokio::test]
    async fn test_get_raw_reaches_untyped_endpoints() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/resumes/abc123"))
            .and(query_param("with_negotiations_history", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "abc123",
                "title": "Rust Engineer"
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        let resume = client
            .get_raw("/resumes/abc123", &[("with_negotiations_history", "true")])
            .await
            .unwrap();

        assert_eq!(resume["title"], "Rust Engineer");
    }

    #[tokio::test]
    async fn test_timeout_surfaces_as_transport_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/areas"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([]))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&mock_server)
            .await;

        let client = HeadHunterClient::new(
            ClientConfig::new(TEST_UA)
                .timeout(Duration::from_millis(50))
                .base_url(mock_server.uri()),
        )
        .unwrap();

        let result = client.areas().await;
        match result {
            Err(ApiError::Transport(transport)) => assert!(transport.is_timeout()),
            other => panic!("expected transport error, got {other:?}"),
        }
    }

    #[tokio::test]
    #[tracing_test::traced_test]
    async fn test_request_emits_tracing_events() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/areas"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        client.areas().await.unwrap();

        assert!(logs_contain("request completed"));
    }
}
