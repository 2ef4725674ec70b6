use serde::{Deserialize, Serialize};
use std::fmt;

/// Origin format of a compared document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    Pdf,
    Docx,
    Excel,
    Csv,
    Txt,
    TextSegment,
}

impl FileKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Pdf => "pdf",
            FileKind::Docx => "docx",
            FileKind::Excel => "excel",
            FileKind::Csv => "csv",
            FileKind::Txt => "txt",
            FileKind::TextSegment => "text_segment",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A document (or ad-hoc text segment) admitted to an analysis session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub name: String, // File path or caller-supplied segment id
    pub kind: FileKind,
    pub content: String,
    pub word_count: usize,
    pub line_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>, // Absent for text segments
}

impl FileRecord {
    /// Build a record, deriving the word and line counts from `content`
    pub fn new(
        name: impl Into<String>,
        kind: FileKind,
        content: impl Into<String>,
        size_bytes: Option<u64>,
    ) -> Self {
        let content = content.into();
        let word_count = content.split_whitespace().count();
        let line_count = content.split('\n').count();
        Self {
            name: name.into(),
            kind,
            content,
            word_count,
            line_count,
            size_bytes,
        }
    }

    /// Build a record for text handed in directly rather than read from a file
    pub fn text_segment(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(name, FileKind::TextSegment, content, None)
    }
}

/// Word-overlap statistics for one ordered pair of records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairwiseSimilarity {
    pub file_a: String,
    pub file_b: String,
    pub common_words: usize,
    pub unique_words_a: usize,
    pub unique_words_b: usize,
    pub similarity_percentage: f64,
    pub difference_percentage: f64,
    pub is_significantly_different: bool,
}

/// Result of a basic (matrix) analysis over every unordered pair of records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub files: Vec<FileRecord>,
    pub comparison_matrix: Vec<PairwiseSimilarity>, // (i, j) with i < j, in insertion order
    pub tolerance_threshold: f64,
    pub analysis_timestamp: String, // RFC 3339
}
