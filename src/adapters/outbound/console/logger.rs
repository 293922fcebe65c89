use crate::ports::outbound::PublishLogger;
use owo_colors::{OwoColorize, Stream};

/// Target of the events emitted by `TracingLogger`.
pub const LOG_TARGET: &str = "dtrack_publish";

/// TracingLogger adapter forwarding messages to `tracing`
///
/// The CLI installs the subscriber; library users bring their own.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

impl PublishLogger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!(target: LOG_TARGET, "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: LOG_TARGET, "{}", message);
    }
}

/// StderrLogger adapter writing plain lines to stderr
///
/// Errors are prefixed so they stand out from progress output, colored
/// when stderr is a terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrLogger;

impl StderrLogger {
    pub fn new() -> Self {
        Self
    }
}

impl PublishLogger for StderrLogger {
    fn info(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn error(&self, message: &str) {
        eprintln!(
            "{} {}",
            "error:".if_supports_color(Stream::Stderr, |text| text.red()),
            message
        );
    }
}
