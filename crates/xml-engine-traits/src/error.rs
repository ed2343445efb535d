//! Error types for XML checks

use std::path::PathBuf;

/// Result type for XML checks
pub type Result<T> = std::result::Result<T, Error>;

/// Every way a single file can fail a check.
///
/// Parser and IO variants display the underlying message verbatim; callers
/// print it after their own prefix.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// XML parsing failed
    #[error("{0}")]
    XmlParse(String),

    /// Reading the file failed
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The bytes do not decode in the document's encoding
    #[error("{0}")]
    Encoding(String),

    /// The path does not exist
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
}

impl Error {
    /// Create a new XML parsing error
    pub fn xml_parse<S: Into<String>>(msg: S) -> Self {
        Error::XmlParse(msg.into())
    }

    /// Short name of the error class, for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Error::XmlParse(_) => "malformed-xml",
            Error::Io(_) => "read-error",
            Error::Encoding(_) => "bad-encoding",
            Error::NotFound(_) => "missing-file",
        }
    }
}
