//! CUMTD HTTP client.
//!
//! All three endpoints share one request path: `fetch_list` issues the GET,
//! checks the HTTP status, checks the nested API status, and pulls the
//! named result array out of the body.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::error::MtdError;
use super::types::{ApiStatus, Departure, DepartureDto, Stop};

/// Default base URL for the CUMTD v2.2 JSON API.
pub const DEFAULT_BASE_URL: &str = "https://developer.mtd.org/api/v2.2/json";

/// Key used when none is configured. Requests made with it will be
/// rejected by the API, but the tool still runs so the user sees why.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY";

/// Departure preview window in minutes.
pub const PREVIEW_MINUTES: u32 = 60;

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the CUMTD client.
#[derive(Debug, Clone)]
pub struct MtdConfig {
    /// API key, sent as the `key` query parameter
    pub api_key: String,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl MtdConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create a config from a key that may not have been provided.
    ///
    /// A missing or empty key becomes [`PLACEHOLDER_API_KEY`].
    pub fn from_optional_key(api_key: Option<String>) -> Self {
        match api_key {
            Some(key) if !key.trim().is_empty() => Self::new(key),
            _ => Self::new(PLACEHOLDER_API_KEY),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Whether the config is still using the placeholder key.
    pub fn has_placeholder_key(&self) -> bool {
        self.api_key == PLACEHOLDER_API_KEY
    }
}

/// CUMTD developer API client.
#[derive(Debug, Clone)]
pub struct MtdClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    timeout: Duration,
}

impl MtdClient {
    /// Create a new client with the given configuration.
    pub fn new(config: MtdConfig) -> Result<Self, MtdError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("mtd-stops/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            timeout: config.timeout,
        })
    }

    /// Fetch every stop in the system.
    ///
    /// The API has no name filter, so searching by name means fetching
    /// the full roster and filtering locally.
    pub async fn all_stops(&self) -> Result<Vec<Stop>, MtdError> {
        self.fetch_list("getstops", &[], "stops").await
    }

    /// Fetch up to `count` stops nearest to a coordinate.
    pub async fn stops_by_lat_lon(
        &self,
        lat: f64,
        lon: f64,
        count: u32,
    ) -> Result<Vec<Stop>, MtdError> {
        self.fetch_list(
            "getstopsbylatlon",
            &[
                ("lat", format!("{lat:?}")),
                ("lon", format!("{lon:?}")),
                ("count", count.to_string()),
            ],
            "stops",
        )
        .await
    }

    /// Fetch departures expected within [`PREVIEW_MINUTES`] at a stop.
    pub async fn departures_by_stop(&self, stop_id: &str) -> Result<Vec<Departure>, MtdError> {
        let departures: Vec<DepartureDto> = self
            .fetch_list(
                "getdeparturesbystop",
                &[
                    ("stop_id", stop_id.to_string()),
                    ("pt", PREVIEW_MINUTES.to_string()),
                ],
                "departures",
            )
            .await?;

        Ok(departures.into_iter().map(Departure::from).collect())
    }

    /// GET `{base_url}/{method}` and extract the `field` array.
    async fn fetch_list<T: DeserializeOwned>(
        &self,
        method: &str,
        params: &[(&str, String)],
        field: &str,
    ) -> Result<Vec<T>, MtdError> {
        let url = format!("{}/{}", self.base_url, method);
        debug!(method, params = params.len(), "requesting CUMTD API");

        let response = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .query(params)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(MtdError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| self.classify(e))?;
        let items = parse_list(&body, field)?;
        debug!(method, count = items.len(), "CUMTD API returned results");
        Ok(items)
    }

    fn classify(&self, err: reqwest::Error) -> MtdError {
        if err.is_timeout() {
            MtdError::Timeout {
                after: self.timeout,
            }
        } else {
            MtdError::from(err)
        }
    }
}

/// Validate the response envelope and pull out the `field` array.
///
/// A missing or `null` field is an empty result; a nested status other
/// than 200 (including a missing one) is an API error.
fn parse_list<T: DeserializeOwned>(body: &str, field: &str) -> Result<Vec<T>, MtdError> {
    let mut root: Value = serde_json::from_str(body)?;
    let Some(object) = root.as_object_mut() else {
        return Err(MtdError::Json {
            message: "expected a JSON object at top level".to_string(),
        });
    };

    let status: ApiStatus = match object.remove("status") {
        Some(Value::Null) | None => ApiStatus::default(),
        Some(value) => serde_json::from_value(value)?,
    };
    if status.code != Some(200) {
        return Err(MtdError::api(status.code, status.msg));
    }

    match object.remove(field) {
        Some(Value::Null) | None => Ok(Vec::new()),
        Some(value) => Ok(serde_json::from_value(value)?),
    }
}
