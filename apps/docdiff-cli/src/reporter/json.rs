//! JSON reporter

use anyhow::Result;
use docdiff_engine::AnalysisOutcome;

pub struct JsonReporter;

impl JsonReporter {
    /// Serialize the outcome; the untagged outcome yields the matrix or detailed shape directly
    pub fn format(outcome: &AnalysisOutcome, pretty: bool) -> Result<String> {
        let output = if pretty {
            serde_json::to_string_pretty(outcome)?
        } else {
            serde_json::to_string(outcome)?
        };
        Ok(output)
    }
}
