//! Configuration types for the catalog client.

use serde::{Deserialize, Serialize};

/// The single catalog endpoint the app ships with.
pub const DEFAULT_BASE_URL: &str = "https://music.juanfrausto.com/api";

/// Configuration for connecting to the catalog API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "https://music.example.com/api")
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl ClientConfig {
    /// Create a new config pointing at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(default_base_url())
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_catalog() {
        assert_eq!(ClientConfig::default().base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_missing_base_url_falls_back_to_default() {
        let config: ClientConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ClientConfig::default());
    }
}
