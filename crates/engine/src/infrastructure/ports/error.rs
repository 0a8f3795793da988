//! Error types for port operations.

/// One failed upstream request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Upstream answered with a non-success status.
    #[error("Upstream responded with status {0}")]
    Status(u16),

    /// The request never produced a response (connect, timeout, TLS, ...).
    #[error("Upstream request failed: {0}")]
    Transport(String),

    /// The response body was not the JSON document we asked for.
    #[error("Invalid upstream body: {0}")]
    InvalidBody(String),
}

impl FetchError {
    /// HTTP status reported by the upstream, if it answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status(code) => Some(*code),
            Self::Transport(_) | Self::InvalidBody(_) => None,
        }
    }
}

/// Read-through gateway errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GatewayError {
    /// Every attempt to fetch a cache miss failed; carries the last failure.
    #[error("Fetching {key} failed: {source}")]
    UpstreamExhausted { key: String, source: FetchError },

    /// The identifier would not address a single resource once put in a URL.
    #[error("Invalid resource identifier: {0:?}")]
    InvalidIdentifier(String),
}

impl GatewayError {
    pub fn upstream_exhausted(key: impl Into<String>, source: FetchError) -> Self {
        Self::UpstreamExhausted {
            key: key.into(),
            source,
        }
    }

    /// Status the upstream answered with on the last attempt, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::UpstreamExhausted { source, .. } => source.status_code(),
            Self::InvalidIdentifier(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_code_is_exposed_only_for_status_failures() {
        assert_eq!(FetchError::Status(503).status_code(), Some(503));
        assert_eq!(FetchError::Transport("timeout".into()).status_code(), None);
        assert_eq!(FetchError::InvalidBody("eof".into()).status_code(), None);
    }

    #[test]
    fn gateway_error_surfaces_last_status() {
        let err = GatewayError::upstream_exhausted("move-33", FetchError::Status(502));
        assert_eq!(err.status_code(), Some(502));
        assert!(err.to_string().contains("move-33"));
    }

    #[test]
    fn invalid_identifier_has_no_status() {
        let err = GatewayError::InvalidIdentifier("?limit=1".into());
        assert_eq!(err.status_code(), None);
    }
}
