//! HTTP page client
//!
//! Fetches one page of a paginated endpoint and extracts its link header.

use crate::error::{Error, Result};
use crate::link::{from_header_map, LinkHeaderResult};
use crate::types::{JsonValue, Query, QueryValue};
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Configuration for the page client
#[derive(Debug, Clone)]
pub struct PageClientConfig {
    /// Base URL resolved against relative paths
    pub base_url: Option<String>,
    /// Request timeout
    pub timeout: Duration,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for PageClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
            default_headers: HashMap::new(),
            user_agent: format!("pagelink/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl PageClientConfig {
    /// Create a new config builder
    pub fn builder() -> PageClientConfigBuilder {
        PageClientConfigBuilder::default()
    }
}

/// Builder for page client config
#[derive(Default)]
pub struct PageClientConfigBuilder {
    config: PageClientConfig,
}

impl PageClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> PageClientConfig {
        self.config
    }
}

/// One fetched page of a paginated result set
#[derive(Debug, Clone)]
pub struct Page {
    /// HTTP status code
    pub status: u16,
    /// JSON body, when the response body parses as JSON
    pub body: Option<JsonValue>,
    /// Raw link header value, suitable for feeding a pagination controller
    pub page_links: Option<String>,
    /// Parsed link header; both directions disabled when the header is absent
    pub links: LinkHeaderResult,
}

impl Page {
    /// Whether more results exist after this page
    pub fn has_next(&self) -> bool {
        self.links.next.results
    }

    /// Whether more results exist before this page
    pub fn has_previous(&self) -> bool {
        self.links.previous.results
    }
}

/// HTTP client for fetching pages
pub struct PageClient {
    client: Client,
    config: PageClientConfig,
}

impl PageClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(PageClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: PageClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { client, config })
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Fetch one page.
    ///
    /// `url` may be absolute or, when a base URL is configured, a relative
    /// path. Query values are appended to whatever the URL already carries.
    /// Non-success statuses become [`Error::HttpStatus`]; a body that is not
    /// JSON yields `body: None` rather than an error.
    pub async fn fetch_page(&self, url: &str, query: &Query) -> Result<Page> {
        let url = self.resolve_url(url)?;
        debug!(%url, "fetching page");

        let mut request = self.client.get(url).query(&flatten_query(query));
        for (key, value) in &self.config.default_headers {
            request = request.header(key.as_str(), value.as_str());
        }

        let response = request.send().await?;
        let status = response.status();
        let page_links = response
            .headers()
            .get("link")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let links = from_header_map(response.headers());

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        let bytes = response.bytes().await?;
        let body = match serde_json::from_slice::<JsonValue>(&bytes) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!(error = %e, "response body is not JSON");
                None
            }
        };

        debug!(
            status = status.as_u16(),
            has_next = links.next.results,
            has_previous = links.previous.results,
            "fetched page"
        );

        Ok(Page {
            status: status.as_u16(),
            body,
            page_links,
            links,
        })
    }

    /// Resolve a possibly-relative URL against the configured base
    fn resolve_url(&self, url: &str) -> Result<Url> {
        if let Some(base) = &self.config.base_url {
            let base = Url::parse(base)?;
            Ok(base.join(url)?)
        } else {
            Ok(Url::parse(url)?)
        }
    }
}

/// Flatten a query map into repeatable key/value pairs for the wire
pub(crate) fn flatten_query(query: &Query) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (key, value) in query {
        match value {
            QueryValue::Single(v) => pairs.push((key.clone(), v.clone())),
            QueryValue::Multi(vs) => {
                for v in vs {
                    pairs.push((key.clone(), v.clone()));
                }
            }
        }
    }
    pairs
}
