//! Custom error types for the binfile-io crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum BinFileError {
    /// An error originating from the underlying OS stream (open, read,
    /// write, flush, or stat failure — including short reads where the
    /// operation's contract demands a full count).
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// An operation was attempted on an instance whose stream has already
    /// been closed or detached.
    #[error("Operation attempted on a closed or detached file handle")]
    InvalidHandle,

    /// An open-mode string did not name one of the supported modes.
    #[error("Unsupported open mode: {0:?}")]
    UnsupportedMode(String),
}

/// A convenience `Result` type alias using the crate's `BinFileError` type.
pub type Result<T> = std::result::Result<T, BinFileError>;
