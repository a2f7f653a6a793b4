//! VBB REST API client.

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::debug;

use crate::domain::{LineRef, Station, StationId};

use super::Lookup;
use super::error::LookupError;
use super::types::{LocationDto, StopDto};

/// Default base URL for the VBB REST API.
pub const DEFAULT_BASE_URL: &str = "https://v5.vbb.transport.rest";

/// Identifier sent with every request so the API operator can tell clients apart.
pub const DEFAULT_IDENTIFIER: &str = "vbb-platform-patterns-cli";

/// Configuration for the VBB API client.
#[derive(Debug, Clone)]
pub struct LookupClientConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Caller identifier, sent as the User-Agent
    pub identifier: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl LookupClientConfig {
    /// Create a new config with the default base URL.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            identifier: DEFAULT_IDENTIFIER.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing or a self-hosted instance).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the caller identifier.
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for LookupClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the VBB REST API.
#[derive(Debug, Clone)]
pub struct VbbClient {
    http: reqwest::Client,
    base_url: String,
}

impl VbbClient {
    /// Create a new VBB API client.
    pub fn new(config: LookupClientConfig) -> Result<Self, LookupError> {
        let mut headers = HeaderMap::new();

        let identifier =
            HeaderValue::from_str(&config.identifier).map_err(|_| LookupError::Api {
                status: 0,
                message: "Invalid identifier format".to_string(),
            })?;
        headers.insert(USER_AGENT, identifier);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_stop(&self, id: &StationId, lines: bool) -> Result<StopDto, LookupError> {
        let url = format!("{}/stops/{}", self.base_url, id.as_str());
        debug!(%url, lines, "fetching stop");

        let response = self
            .http
            .get(&url)
            .query(&[("linesOfStops", lines.to_string())])
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LookupError::StationNotFound(*id));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LookupError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| LookupError::Json {
            message: e.to_string(),
        })
    }
}

impl Lookup for VbbClient {
    async fn find_stations(
        &self,
        query: &str,
        max_results: usize,
        identifier: &str,
    ) -> Result<Vec<Station>, LookupError> {
        let url = format!("{}/locations", self.base_url);
        debug!(%url, query, max_results, "searching stations");

        let response = self
            .http
            .get(&url)
            .header(USER_AGENT, identifier)
            .query(&[
                ("query", query.to_string()),
                ("results", max_results.to_string()),
                ("stops", "true".to_string()),
                ("addresses", "false".to_string()),
                ("poi", "false".to_string()),
            ])
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LookupError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let locations: Vec<LocationDto> =
            serde_json::from_str(&body).map_err(|e| LookupError::Json {
                message: e.to_string(),
            })?;

        Ok(locations
            .into_iter()
            .filter_map(LocationDto::into_station)
            .take(max_results)
            .collect())
    }

    async fn get_station_by_id(&self, id: &StationId) -> Result<Station, LookupError> {
        let stop = self.get_stop(id, false).await?;
        Ok(Station::new(*id, stop.name))
    }

    async fn get_lines_at_station(&self, id: &StationId) -> Result<Vec<LineRef>, LookupError> {
        let stop = self.get_stop(id, true).await?;
        debug!(station = %stop.id, lines = stop.lines.len(), "fetched lines");
        Ok(stop.lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = LookupClientConfig::new();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.identifier, DEFAULT_IDENTIFIER);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_builders() {
        let config = LookupClientConfig::new()
            .with_base_url("http://localhost:3000/")
            .with_identifier("test-suite")
            .with_timeout(5);
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.identifier, "test-suite");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn client_rejects_bad_identifier() {
        let config = LookupClientConfig::new().with_identifier("bad\nvalue");
        assert!(matches!(
            VbbClient::new(config),
            Err(LookupError::Api { status: 0, .. })
        ));
    }

    #[test]
    fn client_keeps_base_url() {
        let client = VbbClient::new(LookupClientConfig::new()).unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }
}
