//! Timer errors with actionable suggestions and sysexits-compliant exit codes.

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimerError {
    #[error("invalid timer format: {input:?}")]
    InvalidFormat { input: String },

    #[error("failed to start timer process: {0}")]
    SpawnFailed(String),

    #[error("timer store error: {0}")]
    Store(#[from] io::Error),
}

impl TimerError {
    /// Returns a helpful suggestion for resolving the error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            TimerError::InvalidFormat { .. } => Some(
                "Format: {time} [label] where time is digit+unit groups, e.g. '45m Take a break' or '1h30m'"
                    .to_string(),
            ),
            TimerError::SpawnFailed(_) => {
                Some("Could not launch the background timer process. Nothing was scheduled.".to_string())
            }
            TimerError::Store(_) => {
                Some("Check that the state directory is writable (set DING_STATE_DIR to override).".to_string())
            }
        }
    }

    /// Converts to UNIX sysexits.h-compliant exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            TimerError::InvalidFormat { .. } => 64, // EX_USAGE
            TimerError::SpawnFailed(_) => 74,       // EX_IOERR
            TimerError::Store(_) => 74,             // EX_IOERR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_format_is_usage_error() {
        let err = TimerError::InvalidFormat {
            input: "banana".to_string(),
        };
        assert_eq!(err.exit_code(), 64);
        assert!(err.suggestion().unwrap().contains("Format:"));
    }

    #[test]
    fn test_io_errors_map_to_ioerr() {
        let err = TimerError::from(io::Error::new(io::ErrorKind::PermissionDenied, "nope"));
        assert_eq!(err.exit_code(), 74);
    }
}
