//! HTTP client for the umd.io API.

use std::time::Duration;

use reqwest::{
    header::{CONTENT_TYPE, REFERER},
    redirect, StatusCode,
};
use serde_json::Value;

use crate::{
    config::Filter,
    query::{
        is_falsy, CourseListQuery, CoursesQuery, ProfessorsQuery, Query, QueryOptions,
        SectionsQuery,
    },
    ApiResult, ClientConfig, Endpoint, Error, BASE_URL,
};

/// Hard limit for a whole request, connect to last body byte.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("umdio-rs/", env!("CARGO_PKG_VERSION"));

const COURSE_FILTERS: &[Filter] = &[Filter::Semester, Filter::DeptId, Filter::PerPage];
const PAGED_FILTERS: &[Filter] = &[Filter::Semester, Filter::PerPage];
const SEMESTER_FILTER: &[Filter] = &[Filter::Semester];

/// HTTP client for the umd.io API.
///
/// Holds the search defaults from [`ClientConfig`] and exposes one method per
/// remote resource. Every method performs at most one GET and returns
/// [`ApiResult::Empty`] instead of failing. Each request builds a fresh
/// `reqwest::Client` that does not follow redirects, does not verify TLS
/// certificates, and gives up after 10 seconds.
pub struct Client {
    /// Base URL for the API, always ending in `/`. Defaults to [`BASE_URL`].
    base_api_url: String,
    config: ClientConfig,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production umd.io API, with no
    /// semester or department filter and the default page size.
    pub fn new() -> Self {
        Self {
            base_api_url: BASE_URL.to_string(),
            config: ClientConfig::default(),
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        let mut base_api_url = base_url.to_string();
        if !base_api_url.ends_with('/') {
            base_api_url.push('/');
        }
        Self {
            base_api_url,
            config: ClientConfig::default(),
        }
    }

    /// Creates a production client with the given search defaults. Invalid
    /// values are normalized as by the setters.
    pub fn with_defaults(
        semester: Option<&str>,
        dept_id: Option<&str>,
        per_page: Option<i64>,
    ) -> Self {
        Self {
            config: ClientConfig::new(semester, dept_id, per_page),
            ..Self::new()
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// See [`ClientConfig::set_semester`].
    pub fn set_semester(&mut self, semester: &str) -> &mut Self {
        self.config.set_semester(semester);
        self
    }

    /// See [`ClientConfig::set_dept_id`].
    pub fn set_dept_id(&mut self, dept_id: &str) -> &mut Self {
        self.config.set_dept_id(dept_id);
        self
    }

    /// See [`ClientConfig::set_per_page`].
    pub fn set_per_page(&mut self, per_page: i64) -> &mut Self {
        self.config.set_per_page(per_page);
        self
    }

    /// Sends one GET to `endpoint` and returns the decoded body.
    ///
    /// This is the strict layer beneath the resource methods: every reason for
    /// an empty result is reported as an [`Error`]. `id` fills the endpoint's
    /// placeholder and must not be `""` or `"0"` for id-keyed endpoints; no
    /// request is sent otherwise. `options` are appended verbatim as a query string.
    pub async fn request(
        &self,
        endpoint: Endpoint,
        id: Option<&str>,
        options: &QueryOptions,
    ) -> Result<Value, Error> {
        let id = match id {
            Some(id) if !is_falsy(id) => Some(id),
            _ if endpoint.requires_id() => return Err(Error::MissingIdentifier { endpoint }),
            _ => None,
        };
        let mut url = endpoint.url(&self.base_api_url, id);
        if !options.is_empty() {
            url.push_str(&options.to_query_string());
        }
        self.get(&url).await
    }

    async fn get(&self, url: &str) -> Result<Value, Error> {
        tracing::debug!("GET {}", url);
        // With rustls, accepting invalid certificates also skips host name checks.
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .redirect(redirect::Policy::none())
            .danger_accept_invalid_certs(true)
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let resp = client
            .get(url)
            .header(REFERER, BASE_URL)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if status != StatusCode::OK {
            let snippet = truncate_body(&body);
            tracing::warn!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        if !is_json(content_type.as_deref()) {
            tracing::warn!("Ignoring response with content type {:?}", content_type);
            return Err(Error::UnexpectedContentType { content_type });
        }

        serde_json::from_str::<Value>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::Decode(e.to_string())
        })
    }

    async fn fetch(
        &self,
        endpoint: Endpoint,
        id: Option<&str>,
        options: &QueryOptions,
    ) -> ApiResult {
        let result = self.request(endpoint, id, options).await;
        if let Err(e) = &result {
            tracing::debug!("Returning empty result for {}: {}", endpoint, e);
        }
        ApiResult::from(result)
    }

    fn options_with(&self, mut options: QueryOptions, filters: &[Filter]) -> QueryOptions {
        self.config.add_to_options(&mut options, filters);
        options
    }

    /// Searches all courses. The semester, department, and page size defaults
    /// are applied.
    pub async fn courses(&self, query: &CoursesQuery) -> ApiResult {
        let options = self.options_with(query.to_options(), COURSE_FILTERS);
        self.fetch(Endpoint::Courses, None, &options).await
    }

    /// Fetches the minified course listing (ids and names). The semester and
    /// page size defaults are applied.
    pub async fn course_list(&self, query: &CourseListQuery) -> ApiResult {
        let options = self.options_with(query.to_options(), PAGED_FILTERS);
        self.fetch(Endpoint::CourseList, None, &options).await
    }

    /// Searches course sections. The semester and page size defaults are applied.
    pub async fn sections(&self, query: &SectionsQuery) -> ApiResult {
        let options = self.options_with(query.to_options(), PAGED_FILTERS);
        self.fetch(Endpoint::Sections, None, &options).await
    }

    /// Fetches one section, e.g. `"AASP100-0101"`, in the default semester.
    pub async fn section(&self, section_id: &str) -> ApiResult {
        let options = self.options_with(QueryOptions::new(), SEMESTER_FILTER);
        self.fetch(Endpoint::Section, Some(section_id), &options).await
    }

    /// Fetches one course, e.g. `"INST414"`, in the default semester.
    pub async fn course(&self, course_id: &str) -> ApiResult {
        let options = self.options_with(QueryOptions::new(), SEMESTER_FILTER);
        self.fetch(Endpoint::Course, Some(course_id), &options).await
    }

    /// Lists the semesters the API has data for (`YYYYMM`).
    pub async fn semesters(&self) -> ApiResult {
        self.fetch(Endpoint::Semesters, None, &QueryOptions::new()).await
    }

    pub async fn departments(&self) -> ApiResult {
        self.fetch(Endpoint::Departments, None, &QueryOptions::new()).await
    }

    pub async fn majors(&self) -> ApiResult {
        self.fetch(Endpoint::Majors, None, &QueryOptions::new()).await
    }

    /// Finds professors by name and/or a course they taught. A search with
    /// neither is not sent.
    pub async fn professors(&self, query: &ProfessorsQuery) -> ApiResult {
        if query.is_empty() {
            tracing::debug!("Skipping professor search without a name or course id");
            return ApiResult::Empty;
        }
        self.fetch(Endpoint::Professors, None, &query.to_options()).await
    }

    pub async fn buildings(&self) -> ApiResult {
        self.fetch(Endpoint::Buildings, None, &QueryOptions::new()).await
    }

    pub async fn building(&self, building_id: &str) -> ApiResult {
        self.fetch(Endpoint::Building, Some(building_id), &QueryOptions::new()).await
    }

    pub async fn bus_routes(&self) -> ApiResult {
        self.fetch(Endpoint::BusRoutes, None, &QueryOptions::new()).await
    }

    pub async fn bus_route(&self, route_id: &str) -> ApiResult {
        self.fetch(Endpoint::BusRoute, Some(route_id), &QueryOptions::new()).await
    }

    pub async fn bus_stops(&self) -> ApiResult {
        self.fetch(Endpoint::BusStops, None, &QueryOptions::new()).await
    }

    pub async fn bus_stop(&self, stop_id: &str) -> ApiResult {
        self.fetch(Endpoint::BusStop, Some(stop_id), &QueryOptions::new()).await
    }

    /// Fetches the stop schedules of one bus route.
    pub async fn bus_schedule(&self, route_id: &str) -> ApiResult {
        self.fetch(Endpoint::BusSchedule, Some(route_id), &QueryOptions::new()).await
    }
}

/// Only an exact `application/json` header counts, parameters included.
fn is_json(content_type: Option<&str>) -> bool {
    content_type == Some("application/json")
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
