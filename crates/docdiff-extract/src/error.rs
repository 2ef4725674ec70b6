use docdiff_types::FileKind;
use std::path::PathBuf;
use thiserror::Error;

/// Reasons a file yields no record
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("File too large: {} is {size} bytes, limit is {limit} bytes", .path.display())]
    FileTooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("{format} support not available: rebuild with --features {feature}")]
    MissingFormatSupport {
        format: FileKind,
        feature: &'static str,
    },

    #[error("Failed to extract text from {format}: {message}")]
    Parse { format: FileKind, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_support_message() {
        let err = ExtractionError::MissingFormatSupport {
            format: FileKind::Docx,
            feature: "docx",
        };
        assert_eq!(
            err.to_string(),
            "docx support not available: rebuild with --features docx"
        );
    }

    #[test]
    fn test_too_large_message() {
        let err = ExtractionError::FileTooLarge {
            path: PathBuf::from("big.txt"),
            size: 2048,
            limit: 1024,
        };
        assert_eq!(
            err.to_string(),
            "File too large: big.txt is 2048 bytes, limit is 1024 bytes"
        );
    }
}
