//! Change-classification core for document revisions
//!
//! Compares the text of two revisions and reports how the content changed.
//! The pipeline runs leaf-first:
//!
//! 1. [`tokenize`] normalizes text into lines and words
//! 2. [`similarity`] scores word-set overlap between records
//! 3. [`align`] computes a line edit script
//! 4. [`shift`] separates moved lines from genuine edits
//! 5. [`classify`] types each remaining edit (numeric, version, date, ...)
//! 6. [`impact`] rolls the changes up into a verdict
//!
//! [`DiffAnalyzer`] ties the stages together for a session of records.
//!
//! # Example
//!
//! ```
//! use docdiff_engine::{DiffAnalyzer, ChangeKind};
//!
//! # fn example() -> Result<(), docdiff_engine::AnalysisError> {
//! let mut analyzer = DiffAnalyzer::default();
//! analyzer.add_text("Workers: 20 parallel", "old");
//! analyzer.add_text("Workers: 21 parallel", "new");
//!
//! let result = analyzer.universal_analyze()?;
//! assert_eq!(result.summary.real_changes_count, 1);
//! assert_eq!(result.universal_analysis.real_changes[0].kind, ChangeKind::NumericChange);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod align;
pub mod analyzer;
pub mod classify;
pub mod impact;
pub mod shift;
pub mod similarity;
pub mod tokenize;
pub mod word_diff;

pub use align::{align, LineEditOp};
pub use analyzer::{analyze_pair, classify_pair, compare_matrix, compare_pair, DiffAnalyzer};
pub use classify::{classify, LinePair, SourceLine};
pub use impact::summarize;
pub use shift::{detect_shifts, ShiftAnalysis};
pub use tokenize::NormalizedText;

// Re-export the shared model so callers need a single dependency
pub use docdiff_types::{
    AnalysisConfig, AnalysisError, AnalysisMethod, AnalysisOutcome, AnalysisSummary, Change,
    ChangeCategory, ChangeImpact, ChangeKind, ClassificationReport, ComparisonResult, ConfigError,
    FileKind, FileRecord, Impact, OverallAssessment, PairwiseSimilarity, UniversalAnalysisResult,
};
