//! Format backends
//!
//! PDF, DOCX and spreadsheet decoding sit behind the `pdf`, `docx` and
//! `excel` features; with a feature disabled the matching function reports
//! `MissingFormatSupport`.

use crate::error::ExtractionError;
use docdiff_types::FileKind;
use encoding_rs::{UTF_8, WINDOWS_1252};
use tracing::warn;

// ============================================================
// Plain text
// ============================================================

/// Decode text bytes as UTF-8, falling back to Windows-1252
pub fn decode_text(bytes: &[u8]) -> String {
    let (text, malformed) = UTF_8.decode_with_bom_removal(bytes);
    if !malformed {
        return text.into_owned();
    }

    warn!("Input is not valid UTF-8, decoding as Windows-1252");
    let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
    text.into_owned()
}

/// Decode text bytes as strict UTF-8
pub fn decode_utf8(bytes: &[u8]) -> Option<String> {
    let (text, malformed) = UTF_8.decode_with_bom_removal(bytes);
    (!malformed).then(|| text.into_owned())
}

// ============================================================
// PDF (feature-gated)
// ============================================================

#[cfg(feature = "pdf")]
pub fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractionError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractionError::Parse {
        format: FileKind::Pdf,
        message: e.to_string(),
    })
}

#[cfg(not(feature = "pdf"))]
pub fn extract_pdf(_bytes: &[u8]) -> Result<String, ExtractionError> {
    Err(ExtractionError::MissingFormatSupport {
        format: FileKind::Pdf,
        feature: "pdf",
    })
}

// ============================================================
// DOCX (feature-gated)
// ============================================================

/// Paragraph text, one paragraph per line
#[cfg(feature = "docx")]
pub fn extract_docx(bytes: &[u8]) -> Result<String, ExtractionError> {
    use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};

    let docx = read_docx(bytes).map_err(|e| ExtractionError::Parse {
        format: FileKind::Docx,
        message: e.to_string(),
    })?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(paragraph) => Some(paragraph),
            _ => None,
        })
        .map(|paragraph| {
            paragraph
                .children
                .iter()
                .filter_map(|child| match child {
                    ParagraphChild::Run(run) => Some(run),
                    _ => None,
                })
                .flat_map(|run| run.children.iter())
                .filter_map(|child| match child {
                    RunChild::Text(text) => Some(text.text.as_str()),
                    _ => None,
                })
                .collect::<String>()
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

#[cfg(not(feature = "docx"))]
pub fn extract_docx(_bytes: &[u8]) -> Result<String, ExtractionError> {
    Err(ExtractionError::MissingFormatSupport {
        format: FileKind::Docx,
        feature: "docx",
    })
}

// ============================================================
// Spreadsheets (feature-gated)
// ============================================================

/// Every sheet as a `Sheet: <name>` line followed by one line per non-empty
/// row, cells joined with ` | `
#[cfg(feature = "excel")]
pub fn extract_excel(bytes: &[u8]) -> Result<String, ExtractionError> {
    use calamine::{open_workbook_auto_from_rs, Reader};
    use std::io::Cursor;

    let parse_error = |e: calamine::Error| ExtractionError::Parse {
        format: FileKind::Excel,
        message: e.to_string(),
    };

    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(parse_error)?;

    let mut lines = Vec::new();
    for name in workbook.sheet_names() {
        let range = workbook.worksheet_range(&name).map_err(parse_error)?;
        lines.push(format!("Sheet: {}", name));
        for row in range.rows() {
            let cells: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
            if cells.iter().any(|cell| !cell.trim().is_empty()) {
                lines.push(cells.join(" | "));
            }
        }
        lines.push(String::new());
    }

    Ok(lines.join("\n"))
}

#[cfg(not(feature = "excel"))]
pub fn extract_excel(_bytes: &[u8]) -> Result<String, ExtractionError> {
    Err(ExtractionError::MissingFormatSupport {
        format: FileKind::Excel,
        feature: "excel",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8() {
        assert_eq!(decode_text("naïve café".as_bytes()), "naïve café");
    }

    #[test]
    fn test_decode_strips_bom() {
        assert_eq!(decode_text(b"\xEF\xBB\xBFhello"), "hello");
    }

    #[test]
    fn test_decode_falls_back_to_windows_1252() {
        // 0xE9 is "é" in Windows-1252 and invalid as standalone UTF-8
        assert_eq!(decode_text(b"caf\xE9 \x80"), "café €");
    }

    #[test]
    fn test_strict_utf8_rejects_invalid_bytes() {
        assert_eq!(decode_utf8(b"plain"), Some("plain".to_string()));
        assert_eq!(decode_utf8(b"\xFF\xFE\x00"), None);
    }

    #[test]
    #[cfg(not(feature = "excel"))]
    fn test_excel_feature_gate_error() {
        assert!(matches!(
            extract_excel(b"PK"),
            Err(ExtractionError::MissingFormatSupport {
                format: FileKind::Excel,
                feature: "excel"
            })
        ));
    }

    #[test]
    #[cfg(feature = "excel")]
    fn test_invalid_spreadsheet_is_a_parse_error() {
        assert!(matches!(
            extract_excel(b"not a spreadsheet"),
            Err(ExtractionError::Parse {
                format: FileKind::Excel,
                ..
            })
        ));
    }

    #[test]
    #[cfg(not(feature = "docx"))]
    fn test_docx_feature_gate_error() {
        assert!(matches!(
            extract_docx(b"fake docx data"),
            Err(ExtractionError::MissingFormatSupport {
                feature: "docx",
                ..
            })
        ));
    }

    #[test]
    #[cfg(feature = "docx")]
    fn test_invalid_docx_is_a_parse_error() {
        assert!(matches!(
            extract_docx(b"not a valid docx file"),
            Err(ExtractionError::Parse {
                format: FileKind::Docx,
                ..
            })
        ));
    }

    #[test]
    #[cfg(not(feature = "pdf"))]
    fn test_pdf_feature_gate_error() {
        assert!(matches!(
            extract_pdf(b"%PDF-1.4"),
            Err(ExtractionError::MissingFormatSupport {
                feature: "pdf",
                ..
            })
        ));
    }
}
