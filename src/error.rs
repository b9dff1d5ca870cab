//! Error types for html-cleaner.
//!
//! The public `clean*` entry points collapse every variant into `None`;
//! the typed errors exist so the failure cause can be logged and, through
//! `try_clean`, inspected by callers that care.

/// Error type for cleaning operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input held no markup or text at all.
    #[error("Document is empty")]
    EmptyDocument,

    /// HTML parsing failed or produced no usable root element.
    #[error("HTML parsing failed: {0}")]
    ParseError(String),

    /// Byte input could not be decoded as text.
    #[error("Encoding detection failed: {0}")]
    EncodingError(String),

    /// The cleaned tree could not be written back out as HTML.
    #[error("HTML serialization failed: {0}")]
    SerializeError(String),
}

/// Result type alias for cleaning operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_cause() {
        let err = Error::EncodingError("invalid windows-1252 sequence".to_string());
        assert_eq!(
            err.to_string(),
            "Encoding detection failed: invalid windows-1252 sequence"
        );
        assert_eq!(Error::EmptyDocument.to_string(), "Document is empty");
    }
}
