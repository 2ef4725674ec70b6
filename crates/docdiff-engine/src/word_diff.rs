//! Word-level change summary, used when line analysis is switched off

use crate::tokenize::NormalizedText;
use docdiff_types::{Change, ChangeKind, Impact};
use std::collections::HashSet;

/// Words listed in a change before the rest is elided
const LISTED_WORDS: usize = 10;

/// At most two changes: one for words only in `new`, one for words only in `old`
pub fn word_changes(old: &NormalizedText, new: &NormalizedText) -> Vec<Change> {
    let old_words = old.word_set();
    let new_words = new.word_set();
    let added = sorted_difference(&new_words, &old_words);
    let removed = sorted_difference(&old_words, &new_words);

    let mut changes = Vec::new();
    if !added.is_empty() {
        changes.push(Change::new(
            ChangeKind::TextChange,
            format!("Added {} new words", added.len()),
            "",
            listing(&added),
            Impact::Moderate,
        ));
    }
    if !removed.is_empty() {
        changes.push(Change::new(
            ChangeKind::TextChange,
            format!("Removed {} words", removed.len()),
            listing(&removed),
            "",
            Impact::Moderate,
        ));
    }
    changes
}

fn sorted_difference<'a>(side: &HashSet<&'a str>, other: &HashSet<&'a str>) -> Vec<&'a str> {
    let mut words: Vec<&str> = side.difference(other).copied().collect();
    words.sort_unstable();
    words
}

fn listing(words: &[&str]) -> String {
    let mut listed = words
        .iter()
        .take(LISTED_WORDS)
        .copied()
        .collect::<Vec<_>>()
        .join(", ");
    if words.len() > LISTED_WORDS {
        listed.push_str("...");
    }
    listed
}

#[cfg(test)]
mod tests {
    use super::*;
    use docdiff_types::AnalysisConfig;
    use pretty_assertions::assert_eq;

    fn text(body: &str) -> NormalizedText {
        NormalizedText::new(body, &AnalysisConfig::default())
    }

    #[test]
    fn test_added_and_removed_words() {
        let changes = word_changes(&text("alpha beta gamma"), &text("beta gamma delta epsilon"));
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].description, "Added 2 new words");
        assert_eq!(changes[0].new_content, "delta, epsilon");
        assert_eq!(changes[0].old_content, "");
        assert_eq!(changes[1].description, "Removed 1 words");
        assert_eq!(changes[1].old_content, "alpha");
        assert!(changes.iter().all(|c| c.impact == Impact::Moderate));
    }

    #[test]
    fn test_identical_word_sets_produce_nothing() {
        assert!(word_changes(&text("one two\nthree"), &text("three two one")).is_empty());
    }

    #[test]
    fn test_long_listing_is_elided() {
        let new_words = "a b c d e f g h i j k l";
        let changes = word_changes(&text(""), &text(new_words));
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].description, "Added 12 new words");
        assert_eq!(changes[0].new_content, "a, b, c, d, e, f, g, h, i, j...");
    }
}
