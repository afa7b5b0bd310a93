//! Error types for epx CLI output.

use std::io;

use thiserror::Error;

/// Main error type for screen rendering.
///
/// The informational screens have no user-facing failure modes of their
/// own; the only thing that can go wrong is the write to the output
/// stream, so everything funnels into [`Error::WriteOutput`].
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to write to the output stream
    #[error("cannot write to output: {source}")]
    WriteOutput {
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl From<io::Error> for Error {
    fn from(source: io::Error) -> Self {
        Error::WriteOutput { source }
    }
}

/// Specialized `Result` type for screen rendering.
pub type Result<T> = std::result::Result<T, Error>;
