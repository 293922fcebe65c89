/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with the file system, the network and the log.
pub mod bom_reader;
pub mod bom_uploader;
pub mod publish_logger;

pub use bom_reader::BomReader;
pub use bom_uploader::{BomUploader, API_KEY_HEADER};
pub use publish_logger::PublishLogger;
