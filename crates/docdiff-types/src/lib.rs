//! Shared types for document revision comparison
//!
//! Every crate in the workspace speaks in these types: extraction adapters
//! produce [`FileRecord`]s, the engine turns pairs of them into
//! [`PairwiseSimilarity`] entries and classified [`Change`]s, and the
//! reporters serialize the resulting [`AnalysisOutcome`].

pub mod change;
pub mod config;
pub mod error;
pub mod types;

pub use change::{
    AnalysisMethod, AnalysisOutcome, AnalysisSummary, Change, ChangeCategory, ChangeImpact,
    ChangeKind, ClassificationReport, Impact, OverallAssessment, UniversalAnalysisResult,
};
pub use config::{AnalysisConfig, AnalysisConfigBuilder};
pub use error::{AnalysisError, ConfigError};
pub use types::{ComparisonResult, FileKind, FileRecord, PairwiseSimilarity};
