//! Change classification
//!
//! Each residue pair left by the shift detector runs through an ordered list
//! of pattern detectors; the first detector that recognizes the edit produces
//! the [`Change`]. Anything no detector claims becomes a `text_change`.
//!
//! Order matters: numeric tokens are the most common and least ambiguous
//! signal, so they are checked first, while URL and email patterns are
//! checked last because other detectors would misfire on their substrings.
//! New detectors slot into [`DETECTORS`] without touching existing ones.

mod numeric;
pub mod patterns;
mod text;
mod token;

pub use numeric::NumericDetector;
pub use text::TextDetector;
pub use token::TokenDetector;

use docdiff_types::Change;

/// One line of a document, in original and normalized form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    pub index: usize, // 0-based position in its document
    pub original: &'a str,
    pub normalized: &'a str,
}

/// Input to the classifier: a replaced pair, or a line with no counterpart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinePair<'a> {
    Replaced {
        old: SourceLine<'a>,
        new: SourceLine<'a>,
    },
    Removed(SourceLine<'a>),
    Added(SourceLine<'a>),
}

impl<'a> LinePair<'a> {
    pub fn old(&self) -> Option<SourceLine<'a>> {
        match *self {
            LinePair::Replaced { old, .. } | LinePair::Removed(old) => Some(old),
            LinePair::Added(_) => None,
        }
    }

    pub fn new(&self) -> Option<SourceLine<'a>> {
        match *self {
            LinePair::Replaced { new, .. } | LinePair::Added(new) => Some(new),
            LinePair::Removed(_) => None,
        }
    }

    /// Both sides, only when the pair is a replacement
    pub fn both(&self) -> Option<(SourceLine<'a>, SourceLine<'a>)> {
        match *self {
            LinePair::Replaced { old, new } => Some((old, new)),
            _ => None,
        }
    }

    pub(crate) fn old_content(&self) -> &'a str {
        self.old().map(|line| line.original).unwrap_or_default()
    }

    pub(crate) fn new_content(&self) -> &'a str {
        self.new().map(|line| line.original).unwrap_or_default()
    }

    pub(crate) fn locate(&self, change: Change) -> Change {
        change.with_lines(
            self.old().map(|line| line.index),
            self.new().map(|line| line.index),
        )
    }
}

/// The single capability every detector offers
pub trait ChangeDetector {
    fn try_classify(&self, pair: &LinePair<'_>) -> Option<Change>;
}

/// Statically registered pattern detectors
#[derive(Debug, Clone, Copy)]
pub enum Detector {
    Numeric(NumericDetector),
    Token(TokenDetector),
}

impl ChangeDetector for Detector {
    fn try_classify(&self, pair: &LinePair<'_>) -> Option<Change> {
        match self {
            Detector::Numeric(detector) => detector.try_classify(pair),
            Detector::Token(detector) => detector.try_classify(pair),
        }
    }
}

/// Pattern detectors in priority order; the text fallback runs after all of them
pub const DETECTORS: [Detector; 5] = [
    Detector::Numeric(NumericDetector),
    Detector::Token(TokenDetector::VERSION),
    Detector::Token(TokenDetector::DATE),
    Detector::Token(TokenDetector::URL),
    Detector::Token(TokenDetector::EMAIL),
];

/// Classify one residue pair; total over all inputs
pub fn classify(pair: &LinePair<'_>) -> Change {
    DETECTORS
        .iter()
        .find_map(|detector| detector.try_classify(pair))
        .unwrap_or_else(|| TextDetector.classify(pair))
}

#[cfg(test)]
mod tests {
    use super::*;
    use docdiff_types::{ChangeCategory, ChangeKind, Impact};

    fn line(index: usize, text: &str) -> SourceLine<'_> {
        SourceLine {
            index,
            original: text,
            normalized: text,
        }
    }

    fn replaced<'a>(old: &'a str, new: &'a str) -> LinePair<'a> {
        LinePair::Replaced {
            old: line(0, old),
            new: line(0, new),
        }
    }

    #[test]
    fn test_numeric_takes_priority() {
        let change = classify(&replaced("G. Perf — 20 parallel /search", "G. Perf — 21 parallel /search"));
        assert_eq!(change.kind, ChangeKind::NumericChange);
        assert_eq!(change.description, "Numeric value changed from 20 to 21");
        assert_eq!(change.old_content, "G. Perf — 20 parallel /search");
        assert_eq!(change.new_content, "G. Perf — 21 parallel /search");
        assert_eq!(change.impact, Impact::Minor);
        assert_eq!(change.category, ChangeCategory::DataModification);
    }

    #[test]
    fn test_version_when_number_counts_differ() {
        let change = classify(&replaced("requires release 1.2", "requires release 1.2.1"));
        assert_eq!(change.kind, ChangeKind::VersionChange);
        assert_eq!(change.impact, Impact::Moderate);
    }

    #[test]
    fn test_date_in_month_name_form() {
        let change = classify(&replaced("due 5 mar 2024", "due 12 mar 2024 at 10"));
        assert_eq!(change.kind, ChangeKind::DateChange);
        assert_eq!(change.impact, Impact::Moderate);
    }

    #[test]
    fn test_url_change() {
        let change = classify(&replaced(
            "docs at https://old.example.com/guide",
            "docs at https://new.example.com/guide",
        ));
        assert_eq!(change.kind, ChangeKind::UrlChange);
        assert_eq!(change.impact, Impact::Minor);
    }

    #[test]
    fn test_email_change() {
        let change = classify(&replaced("contact ops@example.com", "contact team@example.com"));
        assert_eq!(change.kind, ChangeKind::EmailChange);
        assert_eq!(change.impact, Impact::Minor);
    }

    #[test]
    fn test_text_fallback() {
        let change = classify(&replaced("the quick brown fox", "a lazy dog sleeps"));
        assert_eq!(change.kind, ChangeKind::TextChange);
        assert_eq!(change.impact, Impact::Major);
    }

    #[test]
    fn test_unpaired_lines_fall_back_to_text() {
        let added = classify(&LinePair::Added(line(3, "release 1.2 is out")));
        assert_eq!(added.kind, ChangeKind::TextChange);
        assert_eq!(added.description, "Line added: release 1.2 is out");
        assert_eq!(added.old_content, "");
        assert_eq!(added.new_line, Some(4));
        assert_eq!(added.old_line, None);

        let removed = classify(&LinePair::Removed(line(0, "old note")));
        assert_eq!(removed.kind, ChangeKind::TextChange);
        assert_eq!(removed.description, "Line removed: old note");
        assert_eq!(removed.new_content, "");
    }

    #[test]
    fn test_pair_accessors() {
        let pair = replaced("a", "b");
        assert_eq!(pair.old().map(|l| l.original), Some("a"));
        assert_eq!(pair.new().map(|l| l.original), Some("b"));
        assert!(pair.both().is_some());
        assert!(LinePair::Added(line(0, "x")).both().is_none());
    }
}
