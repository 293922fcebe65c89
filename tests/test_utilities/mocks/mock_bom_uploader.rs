use dtrack_bom_publish::prelude::*;
use std::sync::{Arc, Mutex};

/// A request captured by `MockBomUploader`
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub api_key: String,
    pub body: String,
}

/// Mock BomUploader that records requests and answers with a fixed response
#[derive(Clone)]
pub struct MockBomUploader {
    response: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockBomUploader {
    pub fn new() -> Self {
        Self::with_response(r#"{"token":"5c8d2e1f"}"#)
    }

    pub fn with_response(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl BomUploader for MockBomUploader {
    fn put_bom(
        &self,
        url: &str,
        api_key: &str,
        json_body: &str,
    ) -> std::result::Result<String, PublishError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            api_key: api_key.to_string(),
            body: json_body.to_string(),
        });
        Ok(self.response.clone())
    }
}
