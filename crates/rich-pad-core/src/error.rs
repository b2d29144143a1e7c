/// Failure categories for file import.
///
/// All of these are recoverable: the UI surfaces them as transient
/// status messages and the session continues unchanged.
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("unsupported file type: {file_name}")]
    UnsupportedType { file_name: String },

    #[error("{file_name} is {size_mb:.1} MB, over the {limit_mb} MB import limit")]
    TooLarge {
        file_name: String,
        size_mb: f64,
        limit_mb: u64,
    },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not decode {} as text", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}
