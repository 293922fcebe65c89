use crate::application::dto::PublishOutcome;
use crate::ports::inbound::PublishBomPort;
use crate::ports::outbound::{BomReader, BomUploader, PublishLogger};
use crate::publishing::domain::{endpoint_url, PublishConfig, PublishRequestBody};
use crate::shared::Result;

/// Logged once the request has been attempted, whatever its result.
pub const SENT_MESSAGE: &str = "Bom has been sent to dependency track server.";

/// PublishBomUseCase - uploads one BOM to a Dependency-Track server
///
/// The use case validates the configuration, reads and encodes the BOM,
/// builds the endpoint URL and issues a single PUT. Configuration and file
/// problems are returned as errors; failures on the wire are logged and
/// returned as `PublishOutcome::Failed`.
///
/// # Type Parameters
/// * `R` - BomReader implementation
/// * `U` - BomUploader implementation
/// * `L` - PublishLogger implementation
pub struct PublishBomUseCase<R, U, L> {
    bom_reader: R,
    uploader: U,
    logger: L,
}

impl<R, U, L> PublishBomUseCase<R, U, L>
where
    R: BomReader,
    U: BomUploader,
    L: PublishLogger,
{
    /// Creates a new PublishBomUseCase with injected dependencies
    pub fn new(bom_reader: R, uploader: U, logger: L) -> Self {
        Self {
            bom_reader,
            uploader,
            logger,
        }
    }

    /// Executes the publish use case
    ///
    /// # Arguments
    /// * `config` - Fully populated publish parameters
    ///
    /// # Returns
    /// The outcome of the upload attempt
    pub fn execute(&self, config: &PublishConfig) -> Result<PublishOutcome> {
        // Step 1: Gate on a complete configuration, before any I/O
        self.validate_config(config)?;

        // Step 2: Load the BOM
        let bom_text = self.read_bom(config)?;

        // Step 3: Encode and wrap it
        let json_body = self.build_body(config, &bom_text)?;

        // Step 4: Normalize the endpoint
        self.logger.info("Construct url...");
        let url = endpoint_url(config.use_https(), config.host(), config.realm());

        // Step 5: Send, recovering network failures locally
        let outcome = self.send(&url, config.api_key(), &json_body);
        self.logger.info(SENT_MESSAGE);

        Ok(outcome)
    }

    fn validate_config(&self, config: &PublishConfig) -> Result<()> {
        if let Err(e) = config.validate() {
            for parameter in config.missing_parameters() {
                self.logger.error(PublishConfig::hint_for(parameter));
            }
            self.logger
                .error(&format!("Configuration is invalid '{}'.", config));
            return Err(e);
        }

        if !config.project_uuid_is_well_formed() {
            self.logger.info(&format!(
                "Project identifier '{}' is not a UUID. Sending it unchanged.",
                config.project_uuid()
            ));
        }

        Ok(())
    }

    fn read_bom(&self, config: &PublishConfig) -> Result<String> {
        self.logger.info(&format!(
            "Try to read file '{}'...",
            config.bom_file().display()
        ));

        self.bom_reader.read_bom(config.bom_file()).inspect_err(|e| {
            self.logger.error(&e.to_string());
        })
    }

    fn build_body(&self, config: &PublishConfig, bom_text: &str) -> Result<String> {
        self.logger.info("Encode bom string to Base64...");
        let body = PublishRequestBody::new(config.project_uuid(), bom_text).inspect_err(|e| {
            self.logger.error(&e.to_string());
        })?;

        self.logger.info("Construct json body...");
        let json_body = body.to_json()?;
        self.logger
            .info(&format!("Json created ({} bytes).", json_body.len()));

        Ok(json_body)
    }

    fn send(&self, url: &str, api_key: &str, json_body: &str) -> PublishOutcome {
        self.logger.info(&format!("Send request to '{}'...", url));

        match self.uploader.put_bom(url, api_key, json_body) {
            Ok(response) => {
                self.logger
                    .info(&format!("Return content: \n'{}'", response));
                PublishOutcome::Delivered { response }
            }
            Err(error) => {
                self.logger.error(&error.to_string());
                PublishOutcome::Failed { error }
            }
        }
    }
}

impl<R, U, L> PublishBomPort for PublishBomUseCase<R, U, L>
where
    R: BomReader,
    U: BomUploader,
    L: PublishLogger,
{
    fn publish(&self, config: &PublishConfig) -> Result<PublishOutcome> {
        self.execute(config)
    }
}
