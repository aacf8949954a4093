/// Error types for nearest
///
/// This module defines all possible errors that can occur in the application.
/// Uses thiserror for ergonomic error handling.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for nearest operations
#[derive(Error, Debug)]
pub enum NearestError {
    /// I/O errors (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The list file could not be parsed or written as CSV
    #[error("List file format error: {0}")]
    Csv(#[from] csv::Error),

    /// The rewritten list could not be moved over the old one
    #[error("Could not replace list file {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A bare prefix matched nothing
    #[error("no matching directory for prefix: {0}")]
    NoMatch(String),

    /// Home directory lookup failed
    #[error("Could not determine home directory")]
    HomeDirNotFound,

    /// Argument could not be used as a path or prefix
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Shell we have no wrapper for
    #[error("Unsupported shell: {0}")]
    UnsupportedShell(String),
}

/// Result type alias for nearest operations
pub type Result<T> = std::result::Result<T, NearestError>;

/// Convert NearestError to a user-friendly error message
impl NearestError {
    pub fn user_message(&self) -> String {
        match self {
            NearestError::Io(e) => {
                format!("File system error. Check permissions. Details: {}", e)
            }
            NearestError::Csv(e) => {
                format!("The directory list is unreadable. Details: {}", e)
            }
            NearestError::Persist { path, source } => {
                format!(
                    "Could not save the directory list to {}. Details: {}",
                    path.display(),
                    source
                )
            }
            NearestError::NoMatch(prefix) => {
                format!("no matching directory for prefix: {}", prefix)
            }
            NearestError::HomeDirNotFound => {
                "Could not find your home directory".to_string()
            }
            NearestError::InvalidArgument(reason) => {
                format!("Invalid argument: {}", reason)
            }
            NearestError::UnsupportedShell(name) => {
                format!(
                    "Shell '{}' is not supported. Use bash, zsh, fish or powershell",
                    name
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_match_display() {
        let err = NearestError::NoMatch("proj".to_string());
        assert_eq!(err.to_string(), "no matching directory for prefix: proj");
        assert_eq!(err.user_message(), err.to_string());
    }

    #[test]
    fn test_error_user_messages() {
        let err = NearestError::UnsupportedShell("tcsh".to_string());
        assert!(err.user_message().contains("tcsh"));

        let err = NearestError::HomeDirNotFound;
        assert!(err.user_message().contains("home"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: NearestError = io.into();
        assert!(matches!(err, NearestError::Io(_)));
        assert!(format!("{}", err).contains("IO error"));
    }
}
