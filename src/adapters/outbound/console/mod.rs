/// Console adapters for logging
mod logger;

pub use logger::{StderrLogger, TracingLogger, LOG_TARGET};
