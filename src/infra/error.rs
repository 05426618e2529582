//! Error types for CMS context and DER encoding operations.

use thiserror::Error;

/// Result type for CMS operations
pub type CmsResult<T> = Result<T, CmsError>;

/// Error taxonomy for CMS context lifecycle and DER encoding
#[derive(Error, Debug, miette::Diagnostic)]
pub enum CmsError {
    #[error("library initialization failed: {0}")]
    Initialization(String),

    #[error("certificate decode failed: {0}")]
    Decode(String),

    #[error("DER encoding failed: {0}")]
    Encoding(String),

    #[error("invalid algorithm: {0}")]
    InvalidAlgorithm(String),

    #[error("invalid SpcLink discriminant: {0}")]
    InvalidDiscriminant(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for CmsError {
    fn from(error: std::io::Error) -> Self {
        CmsError::Io(error.to_string())
    }
}

impl From<der::Error> for CmsError {
    fn from(error: der::Error) -> Self {
        CmsError::Decode(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = CmsError::Initialization("library already active".to_string());
        assert_eq!(
            error.to_string(),
            "library initialization failed: library already active"
        );

        let error = CmsError::InvalidDiscriminant("unknown SpcLink type 7".to_string());
        assert_eq!(
            error.to_string(),
            "invalid SpcLink discriminant: unknown SpcLink type 7"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "truncated");
        let error: CmsError = io.into();
        match error {
            CmsError::Io(msg) => assert!(msg.contains("truncated")),
            _ => panic!("Wrong error type"),
        }
    }
}
