//! Text extraction adapters
//!
//! Turns files on disk into [`FileRecord`](docdiff_types::FileRecord)s for the
//! analysis core. The format is chosen from the file extension:
//!
//! | Extension | Backend |
//! |---|---|
//! | `.txt`, `.csv` | UTF-8, falling back to Windows-1252 |
//! | `.pdf` | `pdf-extract` (feature `pdf`, on by default) |
//! | `.docx` | `docx-rs` (feature `docx`) |
//! | `.xlsx`, `.xls` | `calamine` (feature `excel`, on by default) |
//! | anything else | read as UTF-8 text, rejected otherwise |
//!
//! All extracted text passes through [`clean_text`].

pub mod clean;
pub mod error;
pub mod extractor;
pub mod formats;

pub use clean::{clean_text, restructure_pdf_text};
pub use error::ExtractionError;
pub use extractor::{extract_bytes, is_supported, kind_for_extension, TextExtractor};
