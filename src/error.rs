use std::io;

/// Errors that abort a single link entry before any link decision is made.
///
/// Link creation problems are never reported here; they are classified into
/// an [`ExtractionOutcome`](crate::ExtractionOutcome) instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("link payload capacity must be at least 1 byte")]
    ZeroCapacity,

    #[error("failed to read link payload: {0}")]
    Read(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
