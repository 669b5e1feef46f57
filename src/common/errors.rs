use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TextKitError {
    #[error("Invalid range {0}")]
    InvalidRange(String),
    #[error("Malformed range {0:?}, expected <int>-<int>")]
    MalformedRange(String),

    #[error("File not found {0}")]
    FileNotFound(PathBuf),
    #[error("Nothing to report on in {0}")]
    EmptyDocument(PathBuf),
}
