//! Generic HTTP client tools
//!
//! One request in, one `(status, body)` pair out. Status interpretation and
//! decoding stay with the caller so that each endpoint decides what a
//! successful response looks like.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ProviderError;

/// Maximum number of bytes of a response body written to the debug log.
const LOG_BODY_LIMIT: usize = 256;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Sends the request and reads the response body as text.
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` - whatever status the server answered with
    /// * `Err(ProviderError::Timeout)` - a configured timeout elapsed
    /// * `Err(ProviderError::InvalidRequest)` - the request could not be built
    /// * `Err(ProviderError::Network)` - any other transport failure
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ProviderError> {
        log::debug!("{method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            let detail = e.to_string();
            if e.is_timeout() {
                ProviderError::Timeout { detail }
            } else if e.is_builder() {
                ProviderError::InvalidRequest { detail }
            } else {
                ProviderError::Network { detail }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| ProviderError::Network {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("Response Body: {}", truncate_for_log(&response_text));

        Ok((status_code, response_text))
    }

    /// Rejects non-2xx statuses.
    pub fn ensure_success(status_code: u16, url: &str) -> Result<(), ProviderError> {
        if (200..300).contains(&status_code) {
            Ok(())
        } else {
            Err(ProviderError::HttpStatus {
                status: status_code,
                url: url.to_string(),
            })
        }
    }

    /// Parse JSON response
    pub fn parse_json<T>(response_text: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(response_text));
            ProviderError::Parse {
                detail: e.to_string(),
            }
        })
    }
}

/// Cuts a body down to [`LOG_BODY_LIMIT`] bytes on a char boundary.
fn truncate_for_log(s: &str) -> String {
    if s.len() <= LOG_BODY_LIMIT {
        return s.to_string();
    }
    let end = (0..=LOG_BODY_LIMIT)
        .rev()
        .find(|&i| s.is_char_boundary(i))
        .unwrap_or(0);
    format!("{}... [truncated, total {} bytes]", &s[..end], s.len())
}
