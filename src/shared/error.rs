use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let scripts tell a view that failed to load apart from
/// a broken invocation or an I/O problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the final view loaded (or no view was mounted)
    Success = 0,
    /// The final view ended in the failed state
    ViewFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (config error, invalid URL, file I/O error, etc.)
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
            ExitCode::ViewFailed => write!(f, "View Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the list shell.
///
/// Uses thiserror to derive Display and Error traits; each message carries
/// a hint for the user where one is useful.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Invalid endpoint URL: {url}\nReason: {reason}\n\n💡 Hint: Use an absolute http:// or https:// URL")]
    InvalidEndpoint { url: String, reason: String },

    #[error("Request to {endpoint} returned status {status}")]
    HttpStatus { endpoint: String, status: u16 },

    #[error("Malformed payload from {endpoint}\nDetails: {details}")]
    MalformedPayload { endpoint: String, details: String },

    #[error("Redirect loop while resolving route: {path}\n\n💡 Hint: Check that redirect targets resolve to a view")]
    RedirectLoop { path: String },

    #[error("Invalid view transition: cannot {action} a view that is already {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for builders and configuration
    #[error("Validation error: {message}")]
    Validation { message: String },
}
