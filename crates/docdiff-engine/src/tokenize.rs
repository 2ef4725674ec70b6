//! Text normalization into lines and words
//!
//! Rules apply in order: lowercase (unless case sensitive), collapse
//! whitespace and trim (when whitespace is ignored), split into lines, and,
//! for similarity scoring only, split lines into words. Line content itself
//! is never word-split for alignment.

use docdiff_types::AnalysisConfig;
use std::collections::HashSet;

/// Punctuation kept inside words so numbers, dates, URLs and addresses stay whole
const CONNECTORS: [char; 6] = ['.', '-', '/', ':', '@', '_'];

/// A text body split into lines, kept in both original and normalized form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    original: Vec<String>,
    normalized: Vec<String>,
}

impl NormalizedText {
    pub fn new(text: &str, config: &AnalysisConfig) -> Self {
        let original = split_lines(text);
        let normalized = original
            .iter()
            .map(|line| normalize_line(line, config))
            .collect();
        Self {
            original,
            normalized,
        }
    }

    pub fn len(&self) -> usize {
        self.original.len()
    }

    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }

    /// Lines as they appeared in the source text
    pub fn original_lines(&self) -> &[String] {
        &self.original
    }

    /// Lines after case and whitespace normalization; what the aligner compares
    pub fn normalized_lines(&self) -> &[String] {
        &self.normalized
    }

    pub fn original(&self, index: usize) -> &str {
        &self.original[index]
    }

    pub fn normalized(&self, index: usize) -> &str {
        &self.normalized[index]
    }

    /// Blank lines still occupy a position but carry no content
    pub fn is_blank(&self, index: usize) -> bool {
        self.normalized[index].trim().is_empty()
    }

    /// Distinct normalized words across all lines
    pub fn word_set(&self) -> HashSet<&str> {
        self.normalized.iter().flat_map(|line| words(line)).collect()
    }
}

/// Split on `\n`, `\r\n` or `\r`, keeping empty lines
pub fn split_lines(text: &str) -> Vec<String> {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .split('\n')
        .map(str::to_string)
        .collect()
}

pub fn normalize_line(line: &str, config: &AnalysisConfig) -> String {
    let line = if config.case_sensitive() {
        line.to_string()
    } else {
        line.to_lowercase()
    };

    if config.ignore_whitespace() {
        line.split_whitespace().collect::<Vec<_>>().join(" ")
    } else {
        line
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || CONNECTORS.contains(&c)
}

/// Words of one line: maximal runs of alphanumerics and connector
/// punctuation, with connectors stripped from both ends
pub fn words(line: &str) -> impl Iterator<Item = &str> + '_ {
    line.split(|c: char| !is_word_char(c))
        .map(|word| word.trim_matches(|c: char| CONNECTORS.contains(&c)))
        .filter(|word| !word.is_empty())
}
