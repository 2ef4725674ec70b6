//! Roll classified changes up into a document-pair verdict

use docdiff_types::{AnalysisSummary, Change, ChangeImpact, ChangeKind, OverallAssessment};

/// Changed-line ratio bands, checked in order
const VERY_SIMILAR_BELOW: f64 = 0.05;
const SIMILAR_BELOW: f64 = 0.15;
const MODERATELY_DIFFERENT_BELOW: f64 = 0.40;

/// Summarize `changes` for a pair whose larger document has `total_lines` lines
pub fn summarize(changes: &[Change], total_lines: usize) -> AnalysisSummary {
    let real: Vec<&Change> = changes.iter().filter(|change| change.is_real()).collect();
    let structural_changes_count = changes.len() - real.len();

    let overall_assessment = if changes.is_empty() {
        OverallAssessment::Identical
    } else {
        assess(real.len() as f64 / total_lines.max(1) as f64)
    };

    let change_impact = real
        .iter()
        .map(|change| change.impact)
        .max()
        .map(ChangeImpact::from)
        .unwrap_or(ChangeImpact::NoChange);

    let mut change_types: Vec<ChangeKind> = real.iter().map(|change| change.kind).collect();
    change_types.sort();
    change_types.dedup();

    AnalysisSummary {
        real_changes_count: real.len(),
        structural_changes_count,
        overall_assessment,
        change_impact,
        change_types,
    }
}

fn assess(changed_ratio: f64) -> OverallAssessment {
    if changed_ratio < VERY_SIMILAR_BELOW {
        OverallAssessment::VerySimilar
    } else if changed_ratio < SIMILAR_BELOW {
        OverallAssessment::Similar
    } else if changed_ratio < MODERATELY_DIFFERENT_BELOW {
        OverallAssessment::ModeratelyDifferent
    } else {
        OverallAssessment::VeryDifferent
    }
}
