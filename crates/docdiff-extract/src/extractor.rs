//! File-to-record extraction

use crate::clean::{clean_text, restructure_pdf_text};
use crate::error::ExtractionError;
use crate::formats;
use docdiff_types::{AnalysisConfig, FileKind, FileRecord};
use std::fs;
use std::path::Path;
use tracing::{debug, instrument};

/// Kind implied by a file extension, if the extension is a known one
pub fn kind_for_extension(extension: &str) -> Option<FileKind> {
    match extension.to_ascii_lowercase().as_str() {
        "pdf" => Some(FileKind::Pdf),
        "docx" => Some(FileKind::Docx),
        "xlsx" | "xls" => Some(FileKind::Excel),
        "csv" => Some(FileKind::Csv),
        "txt" => Some(FileKind::Txt),
        _ => None,
    }
}

/// Whether this build can extract text of the given kind
pub fn is_supported(kind: FileKind) -> bool {
    match kind {
        FileKind::Pdf => cfg!(feature = "pdf"),
        FileKind::Docx => cfg!(feature = "docx"),
        FileKind::Excel => cfg!(feature = "excel"),
        FileKind::Csv | FileKind::Txt | FileKind::TextSegment => true,
    }
}

/// Reads files into [`FileRecord`]s, enforcing the configured size limit
#[derive(Debug, Clone)]
pub struct TextExtractor {
    max_file_size_bytes: u64,
}

impl TextExtractor {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            max_file_size_bytes: config.max_file_size_bytes(),
        }
    }

    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_bytes
    }

    /// Extract one file; the record is named after the path as given
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn extract_file(&self, path: impl AsRef<Path>) -> Result<FileRecord, ExtractionError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ExtractionError::NotFound(path.to_path_buf()));
        }

        let size = fs::metadata(path)?.len();
        if size > self.max_file_size_bytes {
            return Err(ExtractionError::FileTooLarge {
                path: path.to_path_buf(),
                size,
                limit: self.max_file_size_bytes,
            });
        }

        let bytes = fs::read(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();

        let (kind, content) = match kind_for_extension(extension) {
            Some(kind) => (kind, extract_bytes(kind, &bytes)?),
            None => {
                // Unknown extensions are accepted only when they hold valid UTF-8 text
                let text = formats::decode_utf8(&bytes)
                    .ok_or_else(|| ExtractionError::UnsupportedFormat(display_extension(extension)))?;
                (FileKind::Txt, clean_text(&text))
            }
        };

        debug!(%kind, size, chars = content.len(), "Text extracted");
        Ok(FileRecord::new(
            path.display().to_string(),
            kind,
            content,
            Some(size),
        ))
    }
}

/// Extract cleaned text from raw bytes of a known kind
pub fn extract_bytes(kind: FileKind, bytes: &[u8]) -> Result<String, ExtractionError> {
    let raw = match kind {
        FileKind::Txt | FileKind::Csv | FileKind::TextSegment => formats::decode_text(bytes),
        FileKind::Pdf => restructure_pdf_text(&formats::extract_pdf(bytes)?),
        FileKind::Docx => formats::extract_docx(bytes)?,
        FileKind::Excel => formats::extract_excel(bytes)?,
    };
    Ok(clean_text(&raw))
}

fn display_extension(extension: &str) -> String {
    if extension.is_empty() {
        "(no extension)".to_string()
    } else {
        format!(".{}", extension.to_ascii_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_for_extension() {
        assert_eq!(kind_for_extension("PDF"), Some(FileKind::Pdf));
        assert_eq!(kind_for_extension("docx"), Some(FileKind::Docx));
        assert_eq!(kind_for_extension("xls"), Some(FileKind::Excel));
        assert_eq!(kind_for_extension("xlsx"), Some(FileKind::Excel));
        assert_eq!(kind_for_extension("csv"), Some(FileKind::Csv));
        assert_eq!(kind_for_extension("txt"), Some(FileKind::Txt));
        assert_eq!(kind_for_extension("md"), None);
    }

    #[test]
    fn test_is_supported() {
        assert!(is_supported(FileKind::Txt));
        assert!(is_supported(FileKind::Csv));
        assert_eq!(is_supported(FileKind::Excel), cfg!(feature = "excel"));
        assert_eq!(is_supported(FileKind::Pdf), cfg!(feature = "pdf"));
        assert_eq!(is_supported(FileKind::Docx), cfg!(feature = "docx"));
    }

    #[test]
    fn test_extract_bytes_cleans_text() {
        let text = extract_bytes(FileKind::Csv, b"name,  value\r\nalpha,\t1\r\n").unwrap();
        assert_eq!(text, "name, value\nalpha, 1");
    }

    #[test]
    fn test_size_limit_follows_config() {
        let config = AnalysisConfig::builder().max_file_size_mb(2.0).build().unwrap();
        assert_eq!(TextExtractor::new(&config).max_file_size_bytes(), 2 * 1024 * 1024);
    }

    #[test]
    fn test_display_extension() {
        assert_eq!(display_extension("BIN"), ".bin");
        assert_eq!(display_extension(""), "(no extension)");
    }
}
