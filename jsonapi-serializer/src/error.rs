//! Error types for the serializer.

use thiserror::Error;

/// Serializer errors.
///
/// Building attributes and relationship linkage cannot fail. Only URL
/// handling and JSON conversion can.
#[derive(Debug, Error)]
pub enum SerializeError {
    /// The configured base URL does not parse as an absolute URL.
    #[error("malformed url: {0}")]
    MalformedUrl(#[from] url::ParseError),

    /// Input data could not be read as records.
    #[error("invalid input data: {0}")]
    Model(#[from] jsonapi_model::ModelError),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for serializer operations.
pub type SerializeResult<T> = Result<T, SerializeError>;
