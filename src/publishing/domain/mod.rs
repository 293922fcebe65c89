/// Domain model for publishing a BOM
mod endpoint;
mod publish_config;
mod request_body;

pub use endpoint::endpoint_url;
pub use publish_config::{PublishConfig, PublishConfigBuilder, DEFAULT_BOM_FILE, DEFAULT_REALM};
pub use request_body::PublishRequestBody;
