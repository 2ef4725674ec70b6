//! Analysis result reporting
//!
//! # Output Formats
//!
//! - **JSON**: the result structure as-is, compact or pretty-printed
//! - **Console**: human-readable summary, percentages rounded to two decimals

mod console;
mod json;

use anyhow::Result;
use clap::ValueEnum;
use docdiff_engine::AnalysisOutcome;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

pub use console::ConsoleReporter;
pub use json::JsonReporter;

/// Output format for analysis results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Console,
    /// Compact JSON
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

/// Reporter for analysis results
pub struct Reporter {
    format: OutputFormat,
}

impl Reporter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Report the outcome to stdout
    pub fn report(&self, outcome: &AnalysisOutcome) -> Result<()> {
        let output = self.format_outcome(outcome)?;
        let mut stdout = io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        if !output.ends_with('\n') {
            writeln!(stdout)?;
        }
        stdout.flush()?;
        Ok(())
    }

    /// Write the outcome to a file
    pub fn write_to_file<P: AsRef<Path>>(&self, outcome: &AnalysisOutcome, path: P) -> Result<()> {
        let output = self.format_outcome(outcome)?;
        fs::write(path, output)?;
        Ok(())
    }

    pub fn format_outcome(&self, outcome: &AnalysisOutcome) -> Result<String> {
        match self.format {
            OutputFormat::Json => JsonReporter::format(outcome, false),
            OutputFormat::JsonPretty => JsonReporter::format(outcome, true),
            OutputFormat::Console => ConsoleReporter::format(outcome),
        }
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(OutputFormat::default())
    }
}
