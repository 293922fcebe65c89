/// PublishLogger port for reporting the progress of a publish call
///
/// Injected into the use case instead of reaching for a global logger.
/// Network failures are reported through `error` and do not fail the call,
/// so implementations should make the two levels clearly distinguishable.
pub trait PublishLogger {
    /// Reports an informational message
    fn info(&self, message: &str);

    /// Reports an error message
    fn error(&self, message: &str);
}
