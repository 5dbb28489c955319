use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use url::Url;

/// Source of raw OSM node documents.
#[async_trait]
pub trait OsmClient: Send + Sync {
    /// Returns the XML document for the node.
    async fn fetch_node(&self, node_id: u64) -> Result<String, OsmClientError>;
}

/// Errors produced while talking to the OSM API.
#[derive(Debug, Error)]
pub enum OsmClientError {
    #[error("failed to build url: {0}")]
    Url(#[from] url::ParseError),
    #[error("http error: {0}")]
    Http(#[source] reqwest::Error),
    #[error("request timed out")]
    Timeout,
    #[error("node not found")]
    NotFound,
    #[error("unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },
}

impl From<reqwest::Error> for OsmClientError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(value)
        }
    }
}

/// Client for the OSM API v0.6.
#[derive(Clone)]
pub struct OsmApiClient {
    http: Client,
    base_url: Url,
}

impl OsmApiClient {
    /// `base_url` must point at the API root, e.g. `https://api.openstreetmap.org/api/0.6/`.
    pub fn new(base_url: Url, http: Client) -> Self {
        Self { http, base_url }
    }
}

#[async_trait]
impl OsmClient for OsmApiClient {
    async fn fetch_node(&self, node_id: u64) -> Result<String, OsmClientError> {
        let url = self.base_url.join(&format!("node/{node_id}"))?;
        let response = self.http.get(url).send().await?;

        let status = response.status();
        // 410 Gone is what OSM answers for deleted nodes
        if status == StatusCode::NOT_FOUND || status == StatusCode::GONE {
            return Err(OsmClientError::NotFound);
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("<unavailable>"));
            return Err(OsmClientError::Status { status, body });
        }

        Ok(response.text().await?)
    }
}
