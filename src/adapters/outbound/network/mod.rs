/// Network adapters for the Dependency-Track REST API
mod dependency_track_client;

pub use dependency_track_client::DependencyTrackClient;
