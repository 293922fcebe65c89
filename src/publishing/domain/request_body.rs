use crate::shared::error::PublishError;
use crate::shared::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;

/// JSON envelope accepted by the Dependency-Track BOM upload endpoint.
///
/// Fields serialize in declaration order: `project`, then `bom`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishRequestBody {
    project: String,
    bom: String,
}

impl PublishRequestBody {
    /// Encodes `bom_text` and pairs it with the project identifier.
    ///
    /// # Errors
    /// Returns `PublishError::EmptyBom` if `bom_text` is empty.
    pub fn new(project_id: &str, bom_text: &str) -> Result<Self> {
        if bom_text.is_empty() {
            return Err(PublishError::EmptyBom.into());
        }

        Ok(Self {
            project: project_id.to_string(),
            bom: STANDARD.encode(bom_text.as_bytes()),
        })
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    /// The base64-encoded BOM.
    pub fn encoded_bom(&self) -> &str {
        &self.bom
    }

    /// Compact JSON serialization.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
