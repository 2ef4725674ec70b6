//! Classified changes and the verdicts rolled up from them

use crate::types::{ComparisonResult, PairwiseSimilarity};
use serde::{Deserialize, Serialize};

/// What kind of edit a [`Change`] records
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    NumericChange,
    DateChange,
    VersionChange,
    UrlChange,
    EmailChange,
    TextChange,
    StructuralShift,
}

impl ChangeKind {
    pub fn category(&self) -> ChangeCategory {
        match self {
            ChangeKind::StructuralShift => ChangeCategory::Structural,
            _ => ChangeCategory::DataModification,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::NumericChange => "numeric_change",
            ChangeKind::DateChange => "date_change",
            ChangeKind::VersionChange => "version_change",
            ChangeKind::UrlChange => "url_change",
            ChangeKind::EmailChange => "email_change",
            ChangeKind::TextChange => "text_change",
            ChangeKind::StructuralShift => "structural_shift",
        }
    }
}

/// Severity of a single change, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    Minor,
    Moderate,
    Major,
}

impl Impact {
    pub fn as_str(&self) -> &'static str {
        match self {
            Impact::Minor => "minor",
            Impact::Moderate => "moderate",
            Impact::Major => "major",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeCategory {
    DataModification,
    Structural,
}

/// One classified edit between two revisions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    pub kind: ChangeKind,
    pub description: String,
    pub old_content: String, // Original (pre-normalization) line text, empty for additions
    pub new_content: String, // Original (pre-normalization) line text, empty for removals
    pub impact: Impact,
    pub category: ChangeCategory,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub old_values: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub new_values: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_line: Option<usize>, // 1-based
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_line: Option<usize>, // 1-based
}

impl Change {
    /// Create a change; the category always follows from the kind
    pub fn new(
        kind: ChangeKind,
        description: impl Into<String>,
        old_content: impl Into<String>,
        new_content: impl Into<String>,
        impact: Impact,
    ) -> Self {
        Self {
            kind,
            description: description.into(),
            old_content: old_content.into(),
            new_content: new_content.into(),
            impact,
            category: kind.category(),
            old_values: Vec::new(),
            new_values: Vec::new(),
            old_line: None,
            new_line: None,
        }
    }

    pub fn with_values(mut self, old_values: Vec<String>, new_values: Vec<String>) -> Self {
        self.old_values = old_values;
        self.new_values = new_values;
        self
    }

    /// Attach 0-based line indices, stored 1-based
    pub fn with_lines(mut self, old_index: Option<usize>, new_index: Option<usize>) -> Self {
        self.old_line = old_index.map(|i| i + 1);
        self.new_line = new_index.map(|i| i + 1);
        self
    }

    pub fn is_real(&self) -> bool {
        self.category == ChangeCategory::DataModification
    }
}

/// Document-pair verdict derived from the proportion of changed lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallAssessment {
    Identical,
    VerySimilar,
    Similar,
    ModeratelyDifferent,
    VeryDifferent,
}

impl OverallAssessment {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverallAssessment::Identical => "identical",
            OverallAssessment::VerySimilar => "very_similar",
            OverallAssessment::Similar => "similar",
            OverallAssessment::ModeratelyDifferent => "moderately_different",
            OverallAssessment::VeryDifferent => "very_different",
        }
    }
}

/// Highest impact among the real changes of a pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeImpact {
    NoChange,
    MinorUpdate,
    ModerateUpdate,
    MajorUpdate,
}

impl ChangeImpact {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeImpact::NoChange => "no_change",
            ChangeImpact::MinorUpdate => "minor_update",
            ChangeImpact::ModerateUpdate => "moderate_update",
            ChangeImpact::MajorUpdate => "major_update",
        }
    }
}

impl From<Impact> for ChangeImpact {
    fn from(impact: Impact) -> Self {
        match impact {
            Impact::Minor => ChangeImpact::MinorUpdate,
            Impact::Moderate => ChangeImpact::ModerateUpdate,
            Impact::Major => ChangeImpact::MajorUpdate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub real_changes_count: usize,
    pub structural_changes_count: usize,
    pub overall_assessment: OverallAssessment,
    pub change_impact: ChangeImpact,
    pub change_types: Vec<ChangeKind>, // Sorted, distinct kinds of the real changes
}

/// How the classification report was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMethod {
    DetailedLineDiff,
    BasicWordDiff,
}

impl AnalysisMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisMethod::DetailedLineDiff => "detailed_line_diff",
            AnalysisMethod::BasicWordDiff => "basic_word_diff",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationReport {
    pub real_changes: Vec<Change>,
    pub structural_changes: Vec<Change>,
    pub total_changes: usize,
    pub analysis_method: AnalysisMethod,
}

impl ClassificationReport {
    /// Split a flat change list by category, preserving order within each side
    pub fn from_changes(changes: Vec<Change>, analysis_method: AnalysisMethod) -> Self {
        let total_changes = changes.len();
        let (real_changes, structural_changes) = changes.into_iter().partition(Change::is_real);
        Self {
            real_changes,
            structural_changes,
            total_changes,
            analysis_method,
        }
    }
}

/// Detailed result for exactly two records: the basic similarity entry wrapped
/// together with the classification report and its summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniversalAnalysisResult {
    pub basic_analysis: PairwiseSimilarity,
    pub universal_analysis: ClassificationReport,
    pub summary: AnalysisSummary,
}

/// Output of an analysis run, tagged by the stage that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    /// Exactly two records: line-level classification
    Detailed(UniversalAnalysisResult),
    /// More than two records: pairwise similarity only
    Matrix(ComparisonResult),
}
