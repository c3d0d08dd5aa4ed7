use std::io;
use thiserror::Error;

/// Errors raised by the status engine.
///
/// Blocks never produce these: a block that cannot read its data source simply
/// writes nothing. Everything here is an infrastructure failure and ends the
/// process.
#[derive(Error, Debug)]
pub enum StatusError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("{op}: {reason}")]
    Title { op: &'static str, reason: String },

    #[error("line exceeds sink capacity of {capacity} bytes")]
    Overflow { capacity: usize },

    #[error("failed to install signal handler: {0}")]
    Signal(String),

    #[error("not supported: {0}")]
    Unsupported(String),
}

/// Result type alias for the status engine
pub type Result<T> = std::result::Result<T, StatusError>;

impl StatusError {
    /// Create a title error naming the failed window-system operation
    pub fn title<S: Into<String>>(op: &'static str, reason: S) -> Self {
        StatusError::Title {
            op,
            reason: reason.into(),
        }
    }

    pub fn signal<S: Into<String>>(msg: S) -> Self {
        StatusError::Signal(msg.into())
    }

    pub fn unsupported<S: Into<String>>(msg: S) -> Self {
        StatusError::Unsupported(msg.into())
    }
}
