//! Error types for response decoding.
//!
//! Entity deserialization itself is infallible; these errors come from the
//! XML parser, the SOAP fault check, file IO and output rendering.

use thiserror::Error;

/// Main error type for the response library.
#[derive(Debug, Error)]
pub enum ResponseError {
    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// The service answered with a SOAP fault.
    #[error("SOAP fault {code}: {message}")]
    SoapFault { code: String, message: String },

    /// Unknown response kind requested.
    #[error("Unknown response kind: '{0}'. Expected one of: {expected}", expected = crate::parse::ResponseKind::NAMES.join(", "))]
    UnknownKind(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

/// Result type alias for response operations.
pub type Result<T> = std::result::Result<T, ResponseError>;
