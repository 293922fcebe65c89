/// Mock implementations for testing
mod mock_bom_reader;
mod mock_bom_uploader;
mod mock_logger;

#[allow(unused_imports)]
pub use mock_bom_reader::MockBomReader;
#[allow(unused_imports)]
pub use mock_bom_uploader::{MockBomUploader, RecordedRequest};
#[allow(unused_imports)]
pub use mock_logger::MockLogger;
