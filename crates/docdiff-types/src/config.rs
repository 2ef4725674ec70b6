//! Analysis configuration
//!
//! [`AnalysisConfig`] can only be obtained through [`AnalysisConfigBuilder::build`]
//! (directly, or via serde deserialization, which routes through the same
//! check). Out-of-range values are rejected, never clamped.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

const TOLERANCE_RANGE: RangeInclusive<f64> = 0.0..=100.0;
const MAX_FILE_SIZE_RANGE: RangeInclusive<f64> = 0.1..=1000.0;

/// Validated settings for one analysis session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AnalysisConfigBuilder")]
pub struct AnalysisConfig {
    tolerance_percentage: f64,
    enable_word_analysis: bool,
    enable_line_analysis: bool,
    case_sensitive: bool,
    ignore_whitespace: bool,
    max_file_size_mb: f64,
}

impl AnalysisConfig {
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }

    /// Difference percentage above which a pair is flagged as significantly different
    pub fn tolerance_percentage(&self) -> f64 {
        self.tolerance_percentage
    }

    pub fn enable_word_analysis(&self) -> bool {
        self.enable_word_analysis
    }

    pub fn enable_line_analysis(&self) -> bool {
        self.enable_line_analysis
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn ignore_whitespace(&self) -> bool {
        self.ignore_whitespace
    }

    pub fn max_file_size_mb(&self) -> f64 {
        self.max_file_size_mb
    }

    pub fn max_file_size_bytes(&self) -> u64 {
        (self.max_file_size_mb * 1024.0 * 1024.0) as u64
    }

    /// Start a builder pre-filled with this configuration
    pub fn to_builder(&self) -> AnalysisConfigBuilder {
        AnalysisConfigBuilder {
            tolerance_percentage: self.tolerance_percentage,
            enable_word_analysis: self.enable_word_analysis,
            enable_line_analysis: self.enable_line_analysis,
            case_sensitive: self.case_sensitive,
            ignore_whitespace: self.ignore_whitespace,
            max_file_size_mb: self.max_file_size_mb,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        let defaults = AnalysisConfigBuilder::default();
        Self {
            tolerance_percentage: defaults.tolerance_percentage,
            enable_word_analysis: defaults.enable_word_analysis,
            enable_line_analysis: defaults.enable_line_analysis,
            case_sensitive: defaults.case_sensitive,
            ignore_whitespace: defaults.ignore_whitespace,
            max_file_size_mb: defaults.max_file_size_mb,
        }
    }
}

/// Unvalidated configuration values
///
/// Also the deserialization shape of the `[analysis]` table; every field
/// falls back to its default when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfigBuilder {
    pub tolerance_percentage: f64,
    pub enable_word_analysis: bool,
    pub enable_line_analysis: bool,
    pub case_sensitive: bool,
    pub ignore_whitespace: bool,
    pub max_file_size_mb: f64,
}

impl Default for AnalysisConfigBuilder {
    fn default() -> Self {
        Self {
            tolerance_percentage: 30.0,
            enable_word_analysis: true,
            enable_line_analysis: true,
            case_sensitive: false,
            ignore_whitespace: true,
            max_file_size_mb: 100.0,
        }
    }
}

impl AnalysisConfigBuilder {
    pub fn tolerance_percentage(mut self, value: f64) -> Self {
        self.tolerance_percentage = value;
        self
    }

    pub fn enable_word_analysis(mut self, value: bool) -> Self {
        self.enable_word_analysis = value;
        self
    }

    pub fn enable_line_analysis(mut self, value: bool) -> Self {
        self.enable_line_analysis = value;
        self
    }

    pub fn case_sensitive(mut self, value: bool) -> Self {
        self.case_sensitive = value;
        self
    }

    pub fn ignore_whitespace(mut self, value: bool) -> Self {
        self.ignore_whitespace = value;
        self
    }

    pub fn max_file_size_mb(mut self, value: f64) -> Self {
        self.max_file_size_mb = value;
        self
    }

    pub fn build(self) -> Result<AnalysisConfig, ConfigError> {
        check_range(
            "tolerance_percentage",
            self.tolerance_percentage,
            TOLERANCE_RANGE,
        )?;
        check_range(
            "max_file_size_mb",
            self.max_file_size_mb,
            MAX_FILE_SIZE_RANGE,
        )?;

        Ok(AnalysisConfig {
            tolerance_percentage: self.tolerance_percentage,
            enable_word_analysis: self.enable_word_analysis,
            enable_line_analysis: self.enable_line_analysis,
            case_sensitive: self.case_sensitive,
            ignore_whitespace: self.ignore_whitespace,
            max_file_size_mb: self.max_file_size_mb,
        })
    }
}

impl TryFrom<AnalysisConfigBuilder> for AnalysisConfig {
    type Error = ConfigError;

    fn try_from(builder: AnalysisConfigBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

// NaN fails `contains`, so it is rejected along with out-of-range values.
fn check_range(
    field: &'static str,
    value: f64,
    range: RangeInclusive<f64>,
) -> Result<(), ConfigError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}
