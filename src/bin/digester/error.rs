use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Logger error: {0}")]
    Logger(log::SetLoggerError),
    #[error("Input/output error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to open {0:?}: {1}")]
    Open(PathBuf, std::io::Error),
    #[error("Failed to digest {0:?}: {1}")]
    Digest(PathBuf, digester::Error),
}

impl From<log::SetLoggerError> for Error {
    fn from(other: log::SetLoggerError) -> Self {
        Self::Logger(other)
    }
}
