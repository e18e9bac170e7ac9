use std::io;

use thiserror::Error;

/// Errors surfaced by this crate.
///
/// Padding and compression never fail once a block has been obtained, so the only error a digest
/// computation can produce is a failed read from its byte source. The remaining variants belong
/// to parsing digests and algorithm names from text.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read from byte source: {0}")]
    Read(#[from] io::Error),
    #[error("invalid hexadecimal digest")]
    InvalidHex,
    #[error("invalid digest length: expected {expected} hex characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("unknown hash algorithm {0:?}")]
    UnknownAlgorithm(String),
}
