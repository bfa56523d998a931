//! Error types for the catalog client.

use ammora_core::AlbumId;
use thiserror::Error;

/// Errors that can occur when talking to the catalog API.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport failure: no connectivity, refused connection, broken body
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Server returned a non-success status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Detail lookup on an id the server does not know
    #[error("Album not found: {id}")]
    NotFound { id: AlbumId },

    /// Id that cannot be expressed as a single `/albums/{id}` path segment
    /// (empty, `.` or `..`); no request is sent
    #[error("Invalid album id: {0:?}")]
    InvalidId(String),

    /// Response body did not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Invalid base URL in the client configuration
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Stable, machine-readable name of the error kind (used as a log field).
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Server { .. } => "server",
            Self::NotFound { .. } => "not_found",
            Self::InvalidId(_) => "invalid_id",
            Self::Decode(_) => "decode",
            Self::InvalidUrl(_) => "invalid_url",
        }
    }
}

/// Result type for catalog client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        let not_found = ClientError::NotFound {
            id: AlbumId::new("42"),
        };
        assert_eq!(not_found.kind(), "not_found");
        assert_eq!(not_found.to_string(), "Album not found: 42");

        let server = ClientError::Server {
            status: 503,
            message: "maintenance".into(),
        };
        assert_eq!(server.kind(), "server");
        assert_eq!(server.to_string(), "Server error (503): maintenance");

        let invalid = ClientError::InvalidId("..".into());
        assert_eq!(invalid.kind(), "invalid_id");
        assert_eq!(invalid.to_string(), "Invalid album id: \"..\"");

        let decode = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        assert_eq!(ClientError::from(decode).kind(), "decode");
    }
}
