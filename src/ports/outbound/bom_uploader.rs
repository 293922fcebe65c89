use crate::shared::error::PublishError;

/// Header carrying the Dependency-Track API key.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// BomUploader port for submitting the request body to the server
///
/// Implementations issue exactly one request and classify its failure.
/// They never retry.
pub trait BomUploader {
    /// PUTs `json_body` to `url`, authenticated with `api_key`
    ///
    /// # Returns
    /// The response body text of a successful (2xx) response, unparsed
    ///
    /// # Errors
    /// - `PublishError::HttpStatus` for a non-success status
    /// - `PublishError::Connection` if the server cannot be reached
    /// - `PublishError::Transport` for any other request failure
    fn put_bom(&self, url: &str, api_key: &str, json_body: &str) -> Result<String, PublishError>;
}
