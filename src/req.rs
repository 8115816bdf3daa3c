use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::error;

use crate::{consts::RATE_QUOTE_PATH, prelude::*, Error};

/// Outbound transport for rate-quote requests.
///
/// [`HttpClient`] is the real implementation; tests mock this seam so the
/// fetch path can be exercised without a network.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RateTransport: Send + Sync {
    /// POST a JSON-serialized rate request, returning the raw response body.
    async fn request_rates(&self, body: String) -> Result<String>;
}

pub struct HttpClient {
    pub client: Client,
    pub base_url: String,
    api_key: String,
    timeout: Duration,
}

// Custom Debug implementation to prevent API key leakage
impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("client", &self.client)
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

async fn parse_response(response: Response) -> Result<String> {
    let status_code = response.status().as_u16();
    let text = response
        .text()
        .await
        .map_err(|e| Error::ExternalService {
            status: Some(status_code),
            message: e.to_string(),
        })?;

    if (200..300).contains(&status_code) {
        return Ok(text);
    }

    error!(status = status_code, body = %text, "FedEx API error");
    Err(Error::ExternalService {
        status: Some(status_code),
        message: text,
    })
}

impl HttpClient {
    pub fn new(client: Client, base_url: String, api_key: String, timeout: Duration) -> Self {
        Self {
            client,
            base_url,
            api_key,
            timeout,
        }
    }

    /// Send a single POST to `url_path` with a bearer-token header.
    ///
    /// One attempt only; a quote is fetched inside a host request's own
    /// lifetime, so a timeout or transport failure surfaces immediately
    /// instead of retrying.
    pub async fn post(&self, url_path: &'static str, data: String) -> Result<String> {
        let full_url = format!("{}{url_path}", self.base_url);

        let result = self
            .client
            .post(&full_url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .timeout(self.timeout)
            .body(data)
            .send()
            .await
            .map_err(|e| {
                error!(url = %url_path, error = %e, "rate request transport failure");
                let message = if e.is_timeout() {
                    format!("request timed out: {e}")
                } else {
                    e.to_string()
                };
                Error::ExternalService {
                    status: e.status().map(|s| s.as_u16()),
                    message,
                }
            })?;

        parse_response(result).await
    }
}

#[async_trait]
impl RateTransport for HttpClient {
    async fn request_rates(&self, body: String) -> Result<String> {
        self.post(RATE_QUOTE_PATH, body).await
    }
}
