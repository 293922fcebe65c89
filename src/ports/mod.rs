/// Ports layer - Interfaces between the application core and the outside
///
/// Inbound ports are driven by the CLI, outbound ports are implemented
/// by the adapters for the file system, HTTP and logging.
pub mod inbound;
pub mod outbound;
