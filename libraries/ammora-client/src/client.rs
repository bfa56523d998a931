//! Main catalog API client.

use crate::error::{ClientError, Result};
use crate::types::ClientConfig;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

/// Client for the album catalog API.
///
/// Stateless apart from the connection pool. Construct it once at startup
/// and hand clones to whoever needs it; every clone shares the same
/// underlying `reqwest::Client`.
///
/// # Example
///
/// ```ignore
/// use ammora_client::{ClientConfig, MusicApiClient};
///
/// let client = MusicApiClient::new(ClientConfig::new("https://music.example.com/api"))?;
/// let albums = client.list_albums().await?;
/// println!("Found {} albums", albums.len());
/// ```
#[derive(Debug, Clone)]
pub struct MusicApiClient {
    http: Client,
    base_url: Url,
}

impl MusicApiClient {
    /// Create a new client with the given configuration.
    ///
    /// Transport defaults are kept as-is: no timeout override.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let raw = config.base_url.trim();

        // Validate URL
        if raw.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        // Parse and normalize URL
        let normalized = raw.trim_end_matches('/');
        if !normalized.starts_with("http://") && !normalized.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let base_url = Url::parse(normalized)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", raw, e)))?;

        let http = Client::builder()
            .user_agent(format!("AmmoraMusic/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Network)?;

        debug!(base_url = %base_url, "Catalog client created");

        Ok(Self { http, base_url })
    }

    /// Get the normalized base URL (no trailing slash).
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Build an endpoint URL by appending path segments to the base.
    ///
    /// Each segment is percent-encoded, so an id can never escape its slot.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl(format!("{} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Perform one GET and decode the JSON body.
    ///
    /// `not_found` turns a 404 into the given error instead of a generic
    /// server error.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        not_found: Option<ClientError>,
    ) -> Result<T> {
        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            serde_json::from_slice(&body).map_err(|e| {
                warn!(url = %url, error = %e, "Response body did not match expected shape");
                ClientError::Decode(e)
            })
        } else if let (StatusCode::NOT_FOUND, Some(err)) = (status, not_found) {
            debug!(url = %url, "Resource not found");
            Err(err)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            warn!(url = %url, status = status.as_u16(), "Server returned an error");
            Err(ClientError::Server {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}
