//! Tagged screen state and user-facing failures.

use ammora_client::ClientError;
use serde::Serialize;
use std::fmt;

/// State of a single screen's fetch.
///
/// Exactly one variant is active at a time. `Loaded` and `Failed` end a
/// fetch; a new fetch re-enters `Loading`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "lowercase")]
pub enum ViewState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(Failure),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> ViewState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// `Loaded` or `Failed`
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Loaded(_) | Self::Failed(_))
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Failed(failure) => Some(failure),
            _ => None,
        }
    }
}

/// Structured cause of a failed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Network,
    Server,
    NotFound,
    Decode,
}

impl FailureKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FailureKind::Network => "network",
            FailureKind::Server => "server",
            FailureKind::NotFound => "not_found",
            FailureKind::Decode => "decode",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&ClientError> for FailureKind {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::Server { .. } => FailureKind::Server,
            // No album can live under an id that is not a path segment.
            ClientError::NotFound { .. } | ClientError::InvalidId(_) => FailureKind::NotFound,
            ClientError::Decode(_) => FailureKind::Decode,
            // A bad base URL is rejected when the client is built; treat a
            // late one like any other transport failure.
            ClientError::Network(_) | ClientError::InvalidUrl(_) => FailureKind::Network,
        }
    }
}

/// What a presenter shows when a fetch fails.
///
/// `message` is the screen's fixed, never-empty text; `kind` carries the
/// structured cause for presenters that want to say more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub kind: FailureKind,
    pub message: String,
}

impl Failure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn from_error(err: &ClientError, message: &str) -> Self {
        Self::new(FailureKind::from(err), message)
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ammora_core::AlbumId;

    #[test]
    fn test_default_is_idle() {
        let state: ViewState<Vec<u8>> = ViewState::default();
        assert!(state.is_idle());
        assert!(!state.is_settled());
    }

    #[test]
    fn test_accessors() {
        let loaded: ViewState<u8> = ViewState::Loaded(3);
        assert_eq!(loaded.loaded(), Some(&3));
        assert!(loaded.failure().is_none());
        assert!(loaded.is_settled());

        let failed: ViewState<u8> = ViewState::Failed(Failure::new(FailureKind::Server, "nope"));
        assert_eq!(failed.failure().map(|f| f.kind), Some(FailureKind::Server));
        assert!(failed.loaded().is_none());
        assert!(failed.is_settled());
    }

    #[test]
    fn test_failure_kind_mapping() {
        let not_found = ClientError::NotFound {
            id: AlbumId::new("1"),
        };
        assert_eq!(FailureKind::from(&not_found), FailureKind::NotFound);

        let server = ClientError::Server {
            status: 500,
            message: String::new(),
        };
        assert_eq!(FailureKind::from(&server), FailureKind::Server);

        let bad_id = ClientError::InvalidId(".".into());
        assert_eq!(FailureKind::from(&bad_id), FailureKind::NotFound);

        let invalid = ClientError::InvalidUrl("x".into());
        assert_eq!(FailureKind::from(&invalid), FailureKind::Network);
    }

    #[test]
    fn test_failure_display() {
        let failure = Failure::new(FailureKind::NotFound, "Could not load the album");
        assert_eq!(failure.to_string(), "Could not load the album (not_found)");
    }

    #[test]
    fn test_serializes_with_status_tag() {
        let state: ViewState<Vec<u8>> = ViewState::Loaded(vec![]);
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json, serde_json::json!({"status": "loaded", "data": []}));

        let idle: ViewState<Vec<u8>> = ViewState::Idle;
        let json = serde_json::to_value(&idle).unwrap();
        assert_eq!(json, serde_json::json!({"status": "idle"}));
    }
}
