use thiserror::Error;

use crate::core::client::document::DocumentError;
use crate::core::client::object_store::ObjectStoreError;
use crate::core::client::stream::StreamError;

/// Result type for check operations
pub type CloudcheckResult<T> = Result<T, CloudcheckError>;

/// Error types for the check binaries
#[derive(Error, Debug)]
pub enum CloudcheckError {
    #[error("Document store error: {0}")]
    DocumentError(#[from] DocumentError),

    #[error("Stream error: {0}")]
    StreamError(#[from] StreamError),

    #[error("Object store error: {0}")]
    ObjectStoreError(#[from] ObjectStoreError),

    /// Resource Setup error
    #[error("Resource setup error: {0}")]
    ResourceSetupError(String),

    /// A check step observed a state the walkthrough does not allow
    #[error("Check failed: {0}")]
    CheckFailedError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
