//! Top-level error type for a pipeline run.

use std::path::PathBuf;

use crate::domain::ValidationError;
use crate::lookup::LookupError;
use crate::prompt::PromptError;

/// Anything that ends a run without writing an entry.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A station search matched nothing
    #[error("station not found: {0:?}")]
    NotFound(String),

    /// An answer failed validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The user aborted a prompt
    #[error("aborted by user")]
    Aborted,

    /// The terminal could not be read or written
    #[error("terminal error: {0}")]
    Terminal(#[source] std::io::Error),

    /// The lookup service failed
    #[error("{0}")]
    Lookup(#[from] LookupError),

    /// The entry could not be serialized
    #[error("failed to serialize entry: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The dataset file could not be appended to
    #[error("failed to append to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<PromptError> for Error {
    fn from(err: PromptError) -> Self {
        match err {
            PromptError::Aborted => Error::Aborted,
            PromptError::Io(e) => Error::Terminal(e),
        }
    }
}

impl Error {
    /// Process exit status for this error.
    ///
    /// I/O failures carry the OS error number when there is one; everything
    /// else exits with 1.
    pub fn exit_code(&self) -> i32 {
        let code = match self {
            Error::Io { source, .. } | Error::Terminal(source) => source.raw_os_error(),
            _ => None,
        };
        code.filter(|c| (1..=255).contains(c)).unwrap_or(1)
    }
}
