use crate::application::dto::PublishOutcome;
use crate::publishing::domain::PublishConfig;
use crate::shared::Result;

/// PublishBomPort - Inbound port for the publish use case
///
/// This is the single entry point the CLI (or any other driver) uses to
/// upload a BOM.
pub trait PublishBomPort {
    /// Publishes the BOM described by `config`
    ///
    /// # Returns
    /// `PublishOutcome::Delivered` with the server response, or
    /// `PublishOutcome::Failed` when the request failed on the wire. Network
    /// failures are logged and returned here rather than as errors.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A required parameter is empty (`PublishError::ConfigValidation`)
    /// - The BOM file cannot be read (`PublishError::FileRead`)
    /// - The BOM is empty (`PublishError::EmptyBom`)
    fn publish(&self, config: &PublishConfig) -> Result<PublishOutcome>;
}
