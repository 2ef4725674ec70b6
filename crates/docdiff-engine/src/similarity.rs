//! Word-set similarity scoring
//!
//! Words are treated as a set: duplicates collapse before the overlap is
//! counted. `similarity = 200 * common / (|A| + |B|)`, or 100 when both sets
//! are empty, and `difference = 100 - similarity`.

use crate::tokenize::{words, NormalizedText};
use docdiff_types::{AnalysisConfig, FileRecord, PairwiseSimilarity};
use std::collections::HashSet;

/// Overlap statistics between two word sets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordOverlap {
    pub common: usize,
    pub unique_a: usize,
    pub unique_b: usize,
    pub similarity_percentage: f64,
}

impl WordOverlap {
    pub fn difference_percentage(&self) -> f64 {
        100.0 - self.similarity_percentage
    }
}

/// Count the overlap between two word sets in O(|A| + |B|)
pub fn word_overlap(a: &HashSet<&str>, b: &HashSet<&str>) -> WordOverlap {
    let common = a.iter().filter(|word| b.contains(*word)).count();
    let total = a.len() + b.len();

    let similarity_percentage = if total == 0 {
        100.0
    } else {
        200.0 * common as f64 / total as f64
    };

    WordOverlap {
        common,
        unique_a: a.len() - common,
        unique_b: b.len() - common,
        similarity_percentage,
    }
}

/// Strictly greater: a difference equal to the tolerance is not significant
pub fn is_significantly_different(difference_percentage: f64, tolerance_percentage: f64) -> bool {
    difference_percentage > tolerance_percentage
}

/// Word similarity of two single normalized lines, in percent
pub fn line_similarity(old: &str, new: &str) -> f64 {
    let old_words: HashSet<&str> = words(old).collect();
    let new_words: HashSet<&str> = words(new).collect();
    word_overlap(&old_words, &new_words).similarity_percentage
}

/// Score an ordered pair of records under `config`
pub fn score_pair(a: &FileRecord, b: &FileRecord, config: &AnalysisConfig) -> PairwiseSimilarity {
    if !config.enable_word_analysis() {
        return PairwiseSimilarity {
            file_a: a.name.clone(),
            file_b: b.name.clone(),
            common_words: 0,
            unique_words_a: 0,
            unique_words_b: 0,
            similarity_percentage: 100.0,
            difference_percentage: 0.0,
            is_significantly_different: false,
        };
    }

    let text_a = NormalizedText::new(&a.content, config);
    let text_b = NormalizedText::new(&b.content, config);
    let overlap = word_overlap(&text_a.word_set(), &text_b.word_set());
    let difference_percentage = overlap.difference_percentage();

    PairwiseSimilarity {
        file_a: a.name.clone(),
        file_b: b.name.clone(),
        common_words: overlap.common,
        unique_words_a: overlap.unique_a,
        unique_words_b: overlap.unique_b,
        similarity_percentage: overlap.similarity_percentage,
        difference_percentage,
        is_significantly_different: is_significantly_different(
            difference_percentage,
            config.tolerance_percentage(),
        ),
    }
}
