use crate::ports::outbound::{BomUploader, API_KEY_HEADER};
use crate::shared::error::PublishError;
use crate::shared::Result;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use std::error::Error as _;
use std::time::Duration;

/// DependencyTrackClient adapter for the BOM upload endpoint
///
/// Issues a single blocking PUT per call and classifies failures into
/// status, connection and transport errors. No retries.
pub struct DependencyTrackClient {
    client: Client,
}

impl DependencyTrackClient {
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

    /// Creates a client with the default request timeout
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(Self::DEFAULT_TIMEOUT_SECONDS))
    }

    /// Creates a client whose requests give up after `timeout`
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("dtrack-bom-publish/{}", version);
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    fn classify(url: &str, error: reqwest::Error) -> PublishError {
        let details = error_chain(&error);
        if error.is_connect() {
            PublishError::Connection {
                url: url.to_string(),
                details,
            }
        } else {
            PublishError::Transport {
                url: url.to_string(),
                details,
            }
        }
    }
}

/// Flattens an error and its sources into one line.
fn error_chain(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(err) = source {
        message.push_str(": ");
        message.push_str(&err.to_string());
        source = err.source();
    }
    message
}

impl BomUploader for DependencyTrackClient {
    fn put_bom(
        &self,
        url: &str,
        api_key: &str,
        json_body: &str,
    ) -> std::result::Result<String, PublishError> {
        let response = self
            .client
            .put(url)
            .header(API_KEY_HEADER, api_key)
            .header(CONTENT_TYPE, "application/json")
            .body(json_body.to_string())
            .send()
            .map_err(|e| Self::classify(url, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            let message = if body.trim().is_empty() {
                status.canonical_reason().unwrap_or("Unknown status").to_string()
            } else {
                body
            };
            return Err(PublishError::HttpStatus {
                status: status.as_u16(),
                message,
            });
        }

        response.text().map_err(|e| Self::classify(url, e))
    }
}
