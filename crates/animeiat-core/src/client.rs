//! HTTP client for the animeiat site and API.
//!
//! A thin wrapper over reqwest that owns the two origins (page host and
//! API host) and the request timeout. The User-Agent is supplied per
//! request because different parts of the adapter present different
//! browser strings to the site.

use std::time::Duration;

use reqwest::header;
use serde::de::DeserializeOwned;

use crate::error::Result;

/// Default page origin for the streaming site
const DEFAULT_BASE_URL: &str = "https://www.animeiat.xyz";

/// Default origin for the JSON API and asset storage
const DEFAULT_API_BASE_URL: &str = "https://api.animeiat.co";

/// Accept header sent to the download API
const ACCEPT_JSON: &str = "application/json, text/plain, */*";

/// Configuration for the animeiat HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Page origin, e.g. "https://www.animeiat.xyz"
    pub base_url: String,
    /// API origin, e.g. "https://api.animeiat.co"
    pub api_base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

/// HTTP client for animeiat pages and API endpoints
///
/// Every request carries the site Referer. TLS, redirects and connection
/// pooling are delegated to reqwest. Non-2xx statuses are errors; there
/// is no retry policy.
pub struct AnimeiatClient {
    /// Underlying HTTP client
    client: reqwest::Client,
    /// Origins and timeout
    config: ClientConfig,
}

impl AnimeiatClient {
    /// Create a new client with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration.
    ///
    /// # Arguments
    /// * `config` - Client configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    /// Page origin this client is pointed at.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// API origin this client is pointed at.
    pub fn api_base_url(&self) -> &str {
        &self.config.api_base_url
    }

    /// Referer sent with every request (site root with trailing slash).
    fn referer(&self) -> String {
        format!("{}/", self.config.base_url)
    }

    /// Fetch a page and return its body as text.
    ///
    /// # Arguments
    /// * `url` - Absolute URL to fetch
    /// * `user_agent` - Browser string to present for this request
    pub async fn get_html(&self, url: &str, user_agent: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .header(header::USER_AGENT, user_agent)
            .header(header::REFERER, self.referer())
            .send()
            .await?
            .error_for_status()?;

        Ok(response.text().await?)
    }

    /// Fetch and deserialize a JSON endpoint.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str, user_agent: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .header(header::USER_AGENT, user_agent)
            .header(header::REFERER, self.referer())
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }

    /// Fetch and deserialize a JSON endpoint that requires CORS-style
    /// headers (the download API checks the Origin).
    pub async fn get_json_with_origin<T: DeserializeOwned>(
        &self,
        url: &str,
        user_agent: &str,
    ) -> Result<T> {
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, ACCEPT_JSON)
            .header(header::USER_AGENT, user_agent)
            .header(header::REFERER, self.referer())
            .header(header::ORIGIN, self.config.base_url.as_str())
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }
}
