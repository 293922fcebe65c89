use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between a delivered BOM,
/// a failed upload and a broken pipeline configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - BOM delivered, or the upload failed and failures are tolerated
    Success = 0,
    /// The upload failed and `--fail-on-network-error` was set
    PublishFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (configuration, config file, BOM file, empty BOM)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::PublishFailed => write!(f, "Publish Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised while publishing a BOM.
///
/// `ConfigValidation`, `FileRead` and `EmptyBom` abort the publish call.
/// The network variants are recovered by the use case: they are logged and
/// handed back inside a `PublishOutcome::Failed`.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("The necessary parameters are not set: {}\n\n💡 Hint: Specify them on the command line or in the config file", missing.join(", "))]
    ConfigValidation { missing: Vec<&'static str> },

    #[error("Failed to read BOM file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the BOM has been generated and you have read permissions")]
    FileRead { path: PathBuf, details: String },

    #[error("The BOM is empty.\n\n💡 Hint: Check the generated BOM")]
    EmptyBom,

    #[error("HTTP request error: status {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("HTTP connection attempt to {url} failed: {details}")]
    Connection { url: String, details: String },

    #[error("HTTP request to {url} failed: {details}")]
    Transport { url: String, details: String },
}

impl PublishError {
    /// Whether this error happened on the wire and is recovered by logging.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            PublishError::HttpStatus { .. }
                | PublishError::Connection { .. }
                | PublishError::Transport { .. }
        )
    }
}
