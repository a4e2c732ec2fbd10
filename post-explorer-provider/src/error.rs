use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all Remote Data Source operations.
///
/// The variants keep the transport-level cause apart for logging. Callers
/// that only need a human-readable description use [`ProviderError::message`].
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    #[error("Network error: {detail}")]
    Network {
        /// Error details reported by the transport (may be empty).
        detail: String,
    },

    /// The HTTP request timed out.
    ///
    /// Only possible when a request timeout was configured.
    #[error("Request timed out: {detail}")]
    Timeout {
        /// Error details reported by the transport (may be empty).
        detail: String,
    },

    /// The server answered with a non-2xx status.
    #[error("Request failed with status code {status}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// Failed to decode the response body.
    #[error("Failed to parse response: {detail}")]
    Parse {
        /// Details about the parse failure.
        detail: String,
    },

    /// The request could not be built (malformed base URL, invalid client options).
    #[error("Invalid request: {detail}")]
    InvalidRequest {
        /// Details about what's wrong.
        detail: String,
    },
}

impl ProviderError {
    /// Best available human-readable description of the failure.
    ///
    /// Returns `None` when the transport did not provide any detail, so the
    /// caller can substitute its own default text.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        let detail = match self {
            Self::HttpStatus { .. } => return Some(self.to_string()),
            Self::Network { detail }
            | Self::Timeout { detail }
            | Self::Parse { detail }
            | Self::InvalidRequest { detail } => detail,
        };

        if detail.trim().is_empty() {
            None
        } else {
            Some(self.to_string())
        }
    }

    /// 是否为预期行为（资源不存在等 4xx），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::HttpStatus { status, .. } if (400..500).contains(status))
    }
}

/// Result type alias for provider operations.
pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_reads_like_a_browser_client() {
        let e = ProviderError::HttpStatus {
            status: 404,
            url: "https://example.test/posts/101".into(),
        };
        assert_eq!(e.to_string(), "Request failed with status code 404");
        assert_eq!(
            e.message().as_deref(),
            Some("Request failed with status code 404")
        );
    }

    #[test]
    fn empty_network_detail_has_no_message() {
        let e = ProviderError::Network {
            detail: String::new(),
        };
        assert_eq!(e.message(), None);

        let e = ProviderError::Timeout {
            detail: "   ".into(),
        };
        assert_eq!(e.message(), None);
    }

    #[test]
    fn network_detail_is_kept() {
        let e = ProviderError::Network {
            detail: "connection refused".into(),
        };
        assert_eq!(
            e.message().as_deref(),
            Some("Network error: connection refused")
        );
    }

    #[test]
    fn only_client_errors_are_expected() {
        let not_found = ProviderError::HttpStatus {
            status: 404,
            url: String::new(),
        };
        let server = ProviderError::HttpStatus {
            status: 503,
            url: String::new(),
        };
        let parse = ProviderError::Parse {
            detail: "eof".into(),
        };
        assert!(not_found.is_expected());
        assert!(!server.is_expected());
        assert!(!parse.is_expected());
    }

    #[test]
    fn serializes_with_code_tag() {
        let e = ProviderError::HttpStatus {
            status: 500,
            url: "u".into(),
        };
        let json = serde_json::to_value(&e).unwrap_or_default();
        assert_eq!(json["code"], "HttpStatus");
        assert_eq!(json["status"], 500);
    }
}
