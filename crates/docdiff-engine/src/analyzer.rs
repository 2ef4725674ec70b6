//! Analysis session and the stage entry points it drives
//!
//! Two stages exist. The matrix stage scores word overlap for every
//! unordered pair of records. The detailed stage runs the line pipeline
//! (align, shift, classify, summarize) on exactly one pair and wraps the
//! pair's matrix entry together with the resulting report.

use crate::align::align;
use crate::classify::classify;
use crate::impact::summarize;
use crate::shift::detect_shifts;
use crate::similarity::score_pair;
use crate::tokenize::NormalizedText;
use crate::word_diff::word_changes;
use chrono::Utc;
use docdiff_types::{
    AnalysisConfig, AnalysisError, AnalysisMethod, AnalysisOutcome, Change, ClassificationReport,
    ComparisonResult, FileKind, FileRecord, PairwiseSimilarity, UniversalAnalysisResult,
};
use rayon::prelude::*;
use tracing::{debug, info, instrument};

/// Score one ordered pair of records
pub fn compare_pair(
    a: &FileRecord,
    b: &FileRecord,
    config: &AnalysisConfig,
) -> PairwiseSimilarity {
    score_pair(a, b, config)
}

/// Score every unordered pair (i < j), in insertion order
///
/// Pairs are scored in parallel; the output order does not depend on
/// scheduling.
pub fn compare_matrix(records: &[FileRecord], config: &AnalysisConfig) -> Vec<PairwiseSimilarity> {
    let pairs: Vec<(usize, usize)> = (0..records.len())
        .flat_map(|i| (i + 1..records.len()).map(move |j| (i, j)))
        .collect();

    pairs
        .par_iter()
        .map(|&(i, j)| score_pair(&records[i], &records[j], config))
        .collect()
}

/// Classify the changes that turn `old` into `new`
pub fn classify_pair(
    old: &FileRecord,
    new: &FileRecord,
    config: &AnalysisConfig,
) -> ClassificationReport {
    let (changes, method, _) = collect_changes(old, new, config);
    ClassificationReport::from_changes(changes, method)
}

/// Full detailed result for one pair: matrix entry, change report and verdict
#[instrument(skip_all, fields(old = %old.name, new = %new.name))]
pub fn analyze_pair(
    old: &FileRecord,
    new: &FileRecord,
    config: &AnalysisConfig,
) -> UniversalAnalysisResult {
    let basic_analysis = score_pair(old, new, config);
    let (changes, method, total_lines) = collect_changes(old, new, config);
    let summary = summarize(&changes, total_lines);

    debug!(
        real = summary.real_changes_count,
        structural = summary.structural_changes_count,
        total_lines,
        "Pair classified"
    );

    UniversalAnalysisResult {
        basic_analysis,
        universal_analysis: ClassificationReport::from_changes(changes, method),
        summary,
    }
}

/// Changes in emission order (shifts first, then residue in document order),
/// the method that produced them and the line count of the larger document
fn collect_changes(
    old: &FileRecord,
    new: &FileRecord,
    config: &AnalysisConfig,
) -> (Vec<Change>, AnalysisMethod, usize) {
    let old_text = NormalizedText::new(&old.content, config);
    let new_text = NormalizedText::new(&new.content, config);
    let total_lines = old_text.len().max(new_text.len());

    if !config.enable_line_analysis() {
        let changes = word_changes(&old_text, &new_text);
        return (changes, AnalysisMethod::BasicWordDiff, total_lines);
    }

    let ops = align(old_text.normalized_lines(), new_text.normalized_lines());
    let shift_analysis = detect_shifts(&ops, &old_text, &new_text);
    debug!(
        ops = ops.len(),
        shifts = shift_analysis.shifts.len(),
        residue = shift_analysis.residue.len(),
        "Lines aligned"
    );

    let mut changes = shift_analysis.shifts;
    changes.extend(shift_analysis.residue.iter().map(classify));
    (changes, AnalysisMethod::DetailedLineDiff, total_lines)
}

/// An analysis session: one configuration and an ordered set of records
///
/// Records are never modified once added; every analysis call works on the
/// current snapshot and returns a fresh result.
#[derive(Debug, Clone, Default)]
pub struct DiffAnalyzer {
    config: AnalysisConfig,
    records: Vec<FileRecord>,
}

impl DiffAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            records: Vec::new(),
        }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn add_record(&mut self, record: FileRecord) {
        debug!(name = %record.name, kind = %record.kind, "Record added");
        self.records.push(record);
    }

    /// Add text handed in directly, recorded as a `text_segment`
    pub fn add_text(&mut self, text: impl Into<String>, name: impl Into<String>) {
        self.add_record(FileRecord::text_segment(name, text));
    }

    pub fn file_count(&self) -> usize {
        self.records.len()
    }

    pub fn file_names(&self) -> Vec<&str> {
        self.records.iter().map(|record| record.name.as_str()).collect()
    }

    pub fn file_kinds(&self) -> Vec<FileKind> {
        self.records.iter().map(|record| record.kind).collect()
    }

    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Pairwise similarity matrix over all records
    #[instrument(skip(self), fields(files = self.records.len()))]
    pub fn analyze(&self) -> Result<ComparisonResult, AnalysisError> {
        self.require_at_least_two()?;

        let comparison_matrix = compare_matrix(&self.records, &self.config);
        info!(pairs = comparison_matrix.len(), "Similarity matrix computed");

        Ok(ComparisonResult {
            files: self.records.clone(),
            comparison_matrix,
            tolerance_threshold: self.config.tolerance_percentage(),
            analysis_timestamp: Utc::now().to_rfc3339(),
        })
    }

    /// Detailed line-level classification; requires exactly two records
    #[instrument(skip(self), fields(files = self.records.len()))]
    pub fn universal_analyze(&self) -> Result<UniversalAnalysisResult, AnalysisError> {
        match self.records.as_slice() {
            [old, new] => {
                let result = analyze_pair(old, new, &self.config);
                info!(
                    real = result.summary.real_changes_count,
                    structural = result.summary.structural_changes_count,
                    "Change analysis complete"
                );
                Ok(result)
            }
            records if records.len() < 2 => Err(AnalysisError::InsufficientInputs {
                found: records.len(),
            }),
            records => Err(AnalysisError::PairRequired {
                found: records.len(),
            }),
        }
    }

    /// Run the stage that fits the record count: detailed for a pair, matrix otherwise
    pub fn run(&self) -> Result<AnalysisOutcome, AnalysisError> {
        self.require_at_least_two()?;
        if self.records.len() == 2 {
            self.universal_analyze().map(AnalysisOutcome::Detailed)
        } else {
            self.analyze().map(AnalysisOutcome::Matrix)
        }
    }

    fn require_at_least_two(&self) -> Result<(), AnalysisError> {
        if self.records.len() < 2 {
            return Err(AnalysisError::InsufficientInputs {
                found: self.records.len(),
            });
        }
        Ok(())
    }
}
