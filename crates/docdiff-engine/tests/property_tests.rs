//! Property-based tests for docdiff-engine
//!
//! Checks the invariants of scoring, alignment and classification over
//! generated documents using proptest.

use docdiff_engine::{align, classify_pair, compare_pair, AnalysisConfig, DiffAnalyzer, FileRecord};
use proptest::prelude::*;
use std::collections::HashSet;

/// Documents drawn from a small line vocabulary so that repeats, moves and
/// typed edits all show up often
fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "alpha beta",
            "gamma",
            "Workers: 20",
            "Workers: 21",
            "release 1.2.3",
            "release 1.3",
            "see https://example.com",
            "mail ops@example.com",
            "",
        ]),
        0..16,
    )
    .prop_map(|lines| lines.join("\n"))
}

fn words() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-e]{1,3}", 0..12).prop_map(|words| words.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================================
    // Similarity
    // ============================================================

    #[test]
    fn similarity_is_symmetric(a in words(), b in words()) {
        let config = AnalysisConfig::default();
        let left = FileRecord::text_segment("a", a);
        let right = FileRecord::text_segment("b", b);

        let forward = compare_pair(&left, &right, &config);
        let backward = compare_pair(&right, &left, &config);
        prop_assert_eq!(forward.similarity_percentage, backward.similarity_percentage);
        prop_assert_eq!(forward.common_words, backward.common_words);
        prop_assert_eq!(forward.unique_words_a, backward.unique_words_b);
    }

    #[test]
    fn difference_complements_similarity(a in words(), b in words()) {
        let entry = compare_pair(
            &FileRecord::text_segment("a", a),
            &FileRecord::text_segment("b", b),
            &AnalysisConfig::default(),
        );
        prop_assert_eq!(entry.difference_percentage, 100.0 - entry.similarity_percentage);
        prop_assert!((0.0..=100.0).contains(&entry.similarity_percentage));
    }

    // ============================================================
    // Alignment
    // ============================================================

    #[test]
    fn alignment_covers_both_sequences(
        old in prop::collection::vec(0u8..4, 0..24),
        new in prop::collection::vec(0u8..4, 0..24),
    ) {
        let ops = align(&old, &new);
        let (mut next_old, mut next_new) = (0, 0);
        for op in &ops {
            prop_assert_eq!(op.old_range().start, next_old);
            prop_assert_eq!(op.new_range().start, next_new);
            prop_assert!(!(op.old_range().is_empty() && op.new_range().is_empty()));
            if op.is_equal() {
                prop_assert_eq!(&old[op.old_range()], &new[op.new_range()]);
            }
            next_old = op.old_range().end;
            next_new = op.new_range().end;
        }
        prop_assert_eq!(next_old, old.len());
        prop_assert_eq!(next_new, new.len());
    }

    // ============================================================
    // Classification
    // ============================================================

    #[test]
    fn no_line_is_counted_twice(old in document(), new in document()) {
        let report = classify_pair(
            &FileRecord::text_segment("old", old),
            &FileRecord::text_segment("new", new),
            &AnalysisConfig::default(),
        );

        let mut old_lines = HashSet::new();
        let mut new_lines = HashSet::new();
        for change in report.real_changes.iter().chain(&report.structural_changes) {
            if let Some(line) = change.old_line {
                prop_assert!(old_lines.insert(line), "old line {} reported twice", line);
            }
            if let Some(line) = change.new_line {
                prop_assert!(new_lines.insert(line), "new line {} reported twice", line);
            }
        }
        prop_assert_eq!(
            report.total_changes,
            report.real_changes.len() + report.structural_changes.len()
        );
    }

    #[test]
    fn identical_documents_have_no_changes(text in document()) {
        let mut analyzer = DiffAnalyzer::default();
        analyzer.add_text(text.clone(), "old");
        analyzer.add_text(text, "new");
        let result = analyzer.universal_analyze().unwrap();
        prop_assert_eq!(result.universal_analysis.total_changes, 0);
    }

    #[test]
    fn analysis_is_idempotent(old in document(), new in document()) {
        let mut analyzer = DiffAnalyzer::default();
        analyzer.add_text(old, "old");
        analyzer.add_text(new, "new");
        prop_assert_eq!(
            analyzer.universal_analyze().unwrap(),
            analyzer.universal_analyze().unwrap()
        );
    }
}
