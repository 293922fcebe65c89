//! dtrack-bom-publish - publish a generated SBOM to Dependency-Track
//!
//! This library reads a BOM file, base64-encodes it, wraps it in the JSON
//! envelope expected by the Dependency-Track `api/v1/bom` endpoint and
//! uploads it with a single PUT, following hexagonal architecture.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`publishing`): Configuration, request body and URL rules
//! - **Application Layer** (`application`): The publish use case
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): File system, HTTP and logging implementations
//! - **Shared** (`shared`): Error types and the Result alias
//!
//! Configuration and BOM problems are returned as errors. A failed upload
//! is logged and returned as `PublishOutcome::Failed`, so it does not fail
//! the caller unless the caller decides it should.
//!
//! # Example
//!
//! ```no_run
//! use dtrack_bom_publish::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let config = PublishConfig::builder()
//!     .host("localhost:8080")
//!     .api_key("odt_0123456789")
//!     .project_uuid("3f5e2a7c-6c1d-4b8e-9f0a-1b2c3d4e5f60")
//!     .bom_file("build/reports/bom.xml")
//!     .build();
//!
//! let use_case = PublishBomUseCase::new(
//!     FileSystemReader::new(),
//!     DependencyTrackClient::new()?,
//!     StderrLogger::new(),
//! );
//!
//! let outcome = use_case.execute(&config)?;
//! if let Some(error) = outcome.error() {
//!     eprintln!("upload failed: {}", error);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod publishing;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{StderrLogger, TracingLogger};
    pub use crate::adapters::outbound::filesystem::FileSystemReader;
    pub use crate::adapters::outbound::network::DependencyTrackClient;
    pub use crate::application::dto::PublishOutcome;
    pub use crate::application::use_cases::PublishBomUseCase;
    pub use crate::ports::inbound::PublishBomPort;
    pub use crate::ports::outbound::{BomReader, BomUploader, PublishLogger, API_KEY_HEADER};
    pub use crate::publishing::domain::{
        endpoint_url, PublishConfig, PublishConfigBuilder, PublishRequestBody,
    };
    pub use crate::shared::error::{ExitCode, PublishError};
    pub use crate::shared::Result;
}
