/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the outbound ports:
/// the file system, the Dependency-Track HTTP API and the log.
pub mod outbound;
