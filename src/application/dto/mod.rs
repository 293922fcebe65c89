/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod publish_outcome;

pub use publish_outcome::PublishOutcome;
