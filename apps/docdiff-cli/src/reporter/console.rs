//! Console reporter
//!
//! Human-readable summary with box headers and one line per change.

use anyhow::Result;
use docdiff_engine::{
    AnalysisOutcome, Change, ComparisonResult, PairwiseSimilarity, UniversalAnalysisResult,
};
use std::fmt::Write;

const RULE: &str = "────────────────────────────────────────────────────────────────";

pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn format(outcome: &AnalysisOutcome) -> Result<String> {
        let mut output = String::new();
        match outcome {
            AnalysisOutcome::Detailed(result) => Self::format_detailed(&mut output, result)?,
            AnalysisOutcome::Matrix(result) => Self::format_matrix(&mut output, result)?,
        }
        Ok(output)
    }

    fn header(output: &mut String, title: &str) -> Result<()> {
        writeln!(output)?;
        writeln!(output, "╔══════════════════════════════════════════════════════════════╗")?;
        writeln!(output, "║{:^62}║", title)?;
        writeln!(output, "╚══════════════════════════════════════════════════════════════╝")?;
        writeln!(output)?;
        Ok(())
    }

    fn format_detailed(output: &mut String, result: &UniversalAnalysisResult) -> Result<()> {
        let basic = &result.basic_analysis;
        let summary = &result.summary;
        let report = &result.universal_analysis;

        Self::header(output, "DOCUMENT CHANGE ANALYSIS")?;

        writeln!(output, "Old:         {}", basic.file_a)?;
        writeln!(output, "New:         {}", basic.file_b)?;
        writeln!(output, "Method:      {}", report.analysis_method.as_str())?;
        writeln!(output)?;
        Self::format_similarity(output, basic)?;
        writeln!(output)?;

        writeln!(output, "Summary:")?;
        writeln!(output, "  Assessment:          {}", summary.overall_assessment.as_str())?;
        writeln!(output, "  Change impact:       {}", summary.change_impact.as_str())?;
        writeln!(output, "  Real changes:        {}", summary.real_changes_count)?;
        writeln!(output, "  Structural changes:  {}", summary.structural_changes_count)?;
        if !summary.change_types.is_empty() {
            let kinds: Vec<&str> = summary.change_types.iter().map(|kind| kind.as_str()).collect();
            writeln!(output, "  Change types:        {}", kinds.join(", "))?;
        }

        if !report.real_changes.is_empty() {
            writeln!(output)?;
            writeln!(output, "{}", RULE)?;
            writeln!(output, "Real changes")?;
            writeln!(output, "{}", RULE)?;
            for change in &report.real_changes {
                Self::format_change(output, change)?;
            }
        }

        if !report.structural_changes.is_empty() {
            writeln!(output)?;
            writeln!(output, "{}", RULE)?;
            writeln!(output, "Structural changes")?;
            writeln!(output, "{}", RULE)?;
            for change in &report.structural_changes {
                writeln!(output, "  • {}", change.description)?;
            }
        }

        writeln!(output)?;
        Ok(())
    }

    fn format_similarity(output: &mut String, entry: &PairwiseSimilarity) -> Result<()> {
        writeln!(output, "Similarity:  {:.2}%", entry.similarity_percentage)?;
        writeln!(output, "Difference:  {:.2}%", entry.difference_percentage)?;
        writeln!(
            output,
            "Words:       {} common, {} only in old, {} only in new",
            entry.common_words, entry.unique_words_a, entry.unique_words_b
        )?;
        writeln!(
            output,
            "Significant: {}",
            if entry.is_significantly_different { "yes" } else { "no" }
        )?;
        Ok(())
    }

    fn format_change(output: &mut String, change: &Change) -> Result<()> {
        let location = match (change.old_line, change.new_line) {
            (Some(old), Some(new)) => format!("line {} → {}", old, new),
            (Some(old), None) => format!("old line {}", old),
            (None, Some(new)) => format!("new line {}", new),
            (None, None) => "document".to_string(),
        };
        writeln!(
            output,
            "  • [{}, {}] {}: {}",
            change.kind.as_str(),
            change.impact.as_str(),
            location,
            change.description
        )?;
        Ok(())
    }

    fn format_matrix(output: &mut String, result: &ComparisonResult) -> Result<()> {
        Self::header(output, "DOCUMENT SIMILARITY MATRIX")?;

        writeln!(output, "Analyzed:   {}", result.analysis_timestamp)?;
        writeln!(output, "Tolerance:  {:.2}%", result.tolerance_threshold)?;
        writeln!(output)?;

        writeln!(output, "Files ({}):", result.files.len())?;
        for (i, file) in result.files.iter().enumerate() {
            writeln!(
                output,
                "  {}. {} ({}, {} words, {} lines)",
                i + 1,
                file.name,
                file.kind,
                file.word_count,
                file.line_count
            )?;
        }

        writeln!(output)?;
        writeln!(output, "{}", RULE)?;
        writeln!(output, "Pairwise comparison")?;
        writeln!(output, "{}", RULE)?;
        for entry in &result.comparison_matrix {
            let flag = if entry.is_significantly_different { "  [SIGNIFICANT]" } else { "" };
            writeln!(
                output,
                "  {} ↔ {}: similarity {:.2}%, difference {:.2}%{}",
                entry.file_a,
                entry.file_b,
                entry.similarity_percentage,
                entry.difference_percentage,
                flag
            )?;
        }

        let flagged = result
            .comparison_matrix
            .iter()
            .filter(|entry| entry.is_significantly_different)
            .count();
        writeln!(output)?;
        writeln!(
            output,
            "{} of {} pairs differ by more than the tolerance",
            flagged,
            result.comparison_matrix.len()
        )?;
        writeln!(output)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docdiff_engine::DiffAnalyzer;

    #[test]
    fn test_detailed_report_lists_changes() {
        let mut analyzer = DiffAnalyzer::default();
        analyzer.add_text("moved line\nalpha\nbeta\ngamma\nWorkers: 20", "old.txt");
        analyzer.add_text("alpha\nbeta\ngamma\nWorkers: 21\nmoved line", "new.txt");

        let output = ConsoleReporter::format(&analyzer.run().unwrap()).unwrap();
        assert!(output.contains("Old:         old.txt"));
        assert!(output.contains("Assessment:          moderately_different"));
        assert!(output.contains(
            "  • [numeric_change, minor] line 5 → 4: Numeric value changed from 20 to 21"
        ));
        assert!(output.contains("  • Line moved from position 1 to 5"));
    }

    #[test]
    fn test_percentages_are_rounded() {
        let mut analyzer = DiffAnalyzer::default();
        analyzer.add_text("a b c", "one");
        analyzer.add_text("a b d e", "two");
        analyzer.add_text("a", "three");

        let output = ConsoleReporter::format(&analyzer.run().unwrap()).unwrap();
        assert!(output.contains("one ↔ two: similarity 57.14%, difference 42.86%  [SIGNIFICANT]"));
        assert!(output.contains("Tolerance:  30.00%"));
        assert!(output.contains("1. one (text_segment, 3 words, 1 lines)"));
    }
}
