//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

pub use post_explorer_provider::ProviderError;

/// Remote resource addressed by a load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Users,
    Posts,
    Post,
}

impl Resource {
    /// Text shown when the transport gave no description of the failure
    pub fn fallback_message(self) -> &'static str {
        match self {
            Self::Users => "Failed to fetch users",
            Self::Posts => "Failed to fetch posts",
            Self::Post => "Failed to fetch post",
        }
    }
}

/// Fetch boundary error
///
/// Network failure, non-2xx status and malformed body all collapse into the
/// single `FetchFailed` kind; the message is the only thing the view needs.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "message")]
pub enum FetchError {
    #[error("{0}")]
    FetchFailed(String),
}

impl FetchError {
    /// Builds the boundary error, substituting `resource`'s default text when
    /// the provider error carries no description.
    pub fn from_provider(err: &ProviderError, resource: Resource) -> Self {
        let message = err
            .message()
            .unwrap_or_else(|| resource.fallback_message().to_string());
        Self::FetchFailed(message)
    }

    /// Never blank
    pub fn message(&self) -> &str {
        match self {
            Self::FetchFailed(message) => message,
        }
    }
}

pub type FetchResult<T> = Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_network_error_falls_back_to_default() {
        let err = ProviderError::Network {
            detail: String::new(),
        };
        let fetch = FetchError::from_provider(&err, Resource::Post);
        assert_eq!(fetch.message(), "Failed to fetch post");
    }

    #[test]
    fn each_resource_has_its_own_default() {
        let err = ProviderError::Timeout {
            detail: " ".into(),
        };
        assert_eq!(
            FetchError::from_provider(&err, Resource::Users).message(),
            "Failed to fetch users"
        );
        assert_eq!(
            FetchError::from_provider(&err, Resource::Posts).message(),
            "Failed to fetch posts"
        );
    }

    #[test]
    fn provider_description_wins_over_default() {
        let err = ProviderError::HttpStatus {
            status: 404,
            url: "http://x/posts/101".into(),
        };
        let fetch = FetchError::from_provider(&err, Resource::Post);
        assert_eq!(fetch.message(), "Request failed with status code 404");
        assert_eq!(fetch.to_string(), fetch.message());
    }

    #[test]
    fn serializes_message() {
        let json = serde_json::to_value(FetchError::FetchFailed("boom".into()))
            .unwrap_or_default();
        assert_eq!(json["code"], "FetchFailed");
        assert_eq!(json["message"], "boom");
    }
}
