//! CityBikes HTTP client.
//!
//! Fetches the complete station list for one configured bike-share network.
//! The client deliberately returns the raw station array as untyped JSON:
//! validation is the normalizer's job, and a half-broken upstream payload
//! should still yield whatever stations survive normalization.

use serde_json::Value;

use super::error::FeedError;

/// Default base URL for the CityBikes API.
const DEFAULT_BASE_URL: &str = "https://api.citybik.es";

/// Configuration for the feed client.
#[derive(Debug, Clone)]
pub struct CityBikesConfig {
    /// Network slug, e.g. "citi-bike-miami"
    pub network: String,
    /// Base URL for the API (defaults to production CityBikes)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl CityBikesConfig {
    /// Create a new config for the given network slug.
    pub fn new(network: impl Into<String>) -> Self {
        Self {
            network: network.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// CityBikes API client.
///
/// One client serves one network; the station list for that network is the
/// only thing it knows how to fetch.
#[derive(Debug, Clone)]
pub struct CityBikesClient {
    http: reqwest::Client,
    base_url: String,
    network: String,
}

impl CityBikesClient {
    /// Create a new client with the given configuration.
    pub fn new(config: CityBikesConfig) -> Result<Self, FeedError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            network: config.network,
        })
    }

    /// The configured network slug.
    pub fn network(&self) -> &str {
        &self.network
    }

    /// Fetch the full station snapshot for the configured network.
    ///
    /// Returns the raw `stations` array. The `fields` filter keeps the
    /// response small; everything else the endpoint offers is unused.
    pub async fn fetch_stations(&self) -> Result<Value, FeedError> {
        let url = format!(
            "{}/v2/networks/{}?fields=stations",
            self.base_url, self.network
        );

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status.as_u16() == 404 {
            return Err(FeedError::NetworkNotFound(self.network.clone()));
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(FeedError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed: Value = serde_json::from_str(&body).map_err(|e| FeedError::Json {
            message: e.to_string(),
            body: Some(truncate_body(&body)),
        })?;

        extract_stations(parsed)
    }
}

/// Pull the station array out of a network response.
///
/// Accepts either the full `{"network": {"stations": [...]}}` envelope or a
/// bare station array (the shape mock data files use).
pub(super) fn extract_stations(payload: Value) -> Result<Value, FeedError> {
    if payload.is_array() {
        return Ok(payload);
    }

    match payload.pointer("/network/stations") {
        Some(stations) if stations.is_array() => Ok(stations.clone()),
        _ => Err(FeedError::MissingStations),
    }
}

/// Cap an error-report body at something loggable.
fn truncate_body(body: &str) -> String {
    const MAX: usize = 256;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    }
}
