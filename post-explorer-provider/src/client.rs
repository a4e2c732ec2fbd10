//! JSONPlaceholder HTTP client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::traits::DataSource;
use crate::types::{Post, User};

/// Public JSONPlaceholder endpoint
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
/// 默认连接超时（秒）
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Client construction options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    /// API root, without trailing slash
    pub base_url: String,
    pub connect_timeout: Duration,
    /// Whole-request timeout. `None` lets a hung request wait forever.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: None,
        }
    }
}

/// [`DataSource`] backed by reqwest
pub struct JsonPlaceholderClient {
    client: Client,
    base_url: String,
}

impl JsonPlaceholderClient {
    pub fn new(options: ClientOptions) -> Result<Self> {
        let mut builder = Client::builder().connect_timeout(options.connect_timeout);
        if let Some(timeout) = options.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| ProviderError::InvalidRequest {
            detail: format!("Failed to create HTTP client: {e}"),
        })?;

        Ok(Self {
            client,
            base_url: options.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// 执行 GET 请求并解码 JSON
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        let request = self.client.get(&url).header(ACCEPT, "application/json");

        let (status, text) = HttpUtils::execute_request(request, "GET", &url).await?;
        HttpUtils::ensure_success(status, &url)?;
        HttpUtils::parse_json(&text)
    }
}

#[async_trait]
impl DataSource for JsonPlaceholderClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        self.get("/users").await
    }

    async fn list_posts(&self) -> Result<Vec<Post>> {
        self.get("/posts").await
    }

    async fn get_post(&self, id: &str) -> Result<Post> {
        self.get(&post_path(id)).await
    }
}

/// `/posts/{id}`，id 作为单个路径段编码
fn post_path(id: &str) -> String {
    format!("/posts/{}", urlencoding::encode(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_id_untouched() {
        assert_eq!(post_path("42"), "/posts/42");
    }

    #[test]
    fn raw_id_sent_as_single_segment() {
        assert_eq!(post_path("abc"), "/posts/abc");
        assert_eq!(post_path("1 2"), "/posts/1%202");
        assert_eq!(post_path("../users"), "/posts/..%2Fusers");
        assert_eq!(post_path(""), "/posts/");
    }

    #[test]
    fn trailing_slash_trimmed_from_base() {
        let client = JsonPlaceholderClient::new(ClientOptions {
            base_url: "http://127.0.0.1:9/".into(),
            ..ClientOptions::default()
        });
        let Ok(client) = client else {
            panic!("client should build");
        };
        assert_eq!(client.base_url(), "http://127.0.0.1:9");
        assert_eq!(client.url("/users"), "http://127.0.0.1:9/users");
    }

    #[test]
    fn defaults_have_no_request_timeout() {
        let options = ClientOptions::default();
        assert_eq!(options.base_url, DEFAULT_BASE_URL);
        assert_eq!(options.request_timeout, None);
        assert_eq!(options.connect_timeout, Duration::from_secs(10));
    }
}
