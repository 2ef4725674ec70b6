//! Command-line front end for docdiff
//!
//! Extracts text from the given files, runs the analysis stage that fits the
//! number of files, and reports the outcome as console text or JSON.

pub mod config;
pub mod reporter;

use anyhow::{bail, Context, Result};
use clap::Parser;
use docdiff_engine::{AnalysisConfig, AnalysisOutcome, ConfigError, DiffAnalyzer};
use docdiff_extract::TextExtractor;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::config::FileConfig;
use crate::reporter::{OutputFormat, Reporter};

#[derive(Parser, Debug)]
#[command(name = "docdiff")]
#[command(version, about = "Classify the changes between document revisions")]
pub struct Args {
    /// Files to compare; two give a detailed change report, more give a similarity matrix
    #[arg(required = true, num_args = 2..)]
    pub files: Vec<PathBuf>,

    /// TOML file with an [analysis] table
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Difference percentage above which files count as significantly different
    #[arg(short, long)]
    pub tolerance: Option<f64>,

    /// Compare letter case exactly
    #[arg(long)]
    pub case_sensitive: bool,

    /// Treat whitespace differences as changes
    #[arg(long)]
    pub keep_whitespace: bool,

    /// Skip word-overlap scoring
    #[arg(long)]
    pub no_word_analysis: bool,

    /// Report word-level differences instead of line-level changes
    #[arg(long)]
    pub no_line_analysis: bool,

    /// Largest file accepted, in megabytes
    #[arg(long)]
    pub max_file_size_mb: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Console)]
    pub format: OutputFormat,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Leave out files that cannot be read instead of failing
    #[arg(long)]
    pub skip_unreadable: bool,
}

impl Args {
    /// Layer command-line flags over a base configuration
    pub fn apply(&self, base: &AnalysisConfig) -> Result<AnalysisConfig, ConfigError> {
        let mut builder = base.to_builder();
        if let Some(tolerance) = self.tolerance {
            builder = builder.tolerance_percentage(tolerance);
        }
        if let Some(max_file_size_mb) = self.max_file_size_mb {
            builder = builder.max_file_size_mb(max_file_size_mb);
        }
        if self.case_sensitive {
            builder = builder.case_sensitive(true);
        }
        if self.keep_whitespace {
            builder = builder.ignore_whitespace(false);
        }
        if self.no_word_analysis {
            builder = builder.enable_word_analysis(false);
        }
        if self.no_line_analysis {
            builder = builder.enable_line_analysis(false);
        }
        builder.build()
    }

    /// Configuration from the config file (if any) with flags applied
    pub fn resolve_config(&self) -> Result<AnalysisConfig> {
        let base = match &self.config {
            Some(path) => FileConfig::from_file(path)?.analysis,
            None => AnalysisConfig::default(),
        };
        Ok(self.apply(&base)?)
    }
}

/// Extract every file and run the analysis
pub fn analyze(args: &Args) -> Result<AnalysisOutcome> {
    let config = args.resolve_config()?;
    let extractor = TextExtractor::new(&config);
    let mut analyzer = DiffAnalyzer::new(config);

    for path in &args.files {
        match extractor.extract_file(path) {
            Ok(record) => analyzer.add_record(record),
            Err(e) if args.skip_unreadable => {
                warn!("Skipping {}: {}", path.display(), e);
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()));
            }
        }
    }

    if analyzer.file_count() < 2 {
        bail!(
            "At least 2 readable files are required, got {}",
            analyzer.file_count()
        );
    }

    info!(files = analyzer.file_count(), "Analyzing");
    Ok(analyzer.run()?)
}

/// Run the command: analyze, then print or write the report
pub fn run(args: &Args) -> Result<()> {
    let outcome = analyze(args)?;
    let reporter = Reporter::new(args.format);

    match &args.output {
        Some(path) => {
            reporter
                .write_to_file(&outcome, path)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            info!("Report written to {}", path.display());
        }
        None => reporter.report(&outcome)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("docdiff").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_requires_two_files() {
        assert!(Args::try_parse_from(["docdiff", "only.txt"]).is_err());
        assert_eq!(parse(&["a.txt", "b.txt", "c.txt"]).files.len(), 3);
    }

    #[test]
    fn test_flags_override_base_config() {
        let args = parse(&[
            "a.txt",
            "b.txt",
            "--tolerance",
            "12.5",
            "--case-sensitive",
            "--keep-whitespace",
            "--no-line-analysis",
        ]);
        let config = args.apply(&AnalysisConfig::default()).unwrap();
        assert_eq!(config.tolerance_percentage(), 12.5);
        assert!(config.case_sensitive());
        assert!(!config.ignore_whitespace());
        assert!(!config.enable_line_analysis());
        assert!(config.enable_word_analysis());
    }

    #[test]
    fn test_unset_flags_keep_base_values() {
        let base = AnalysisConfig::builder()
            .tolerance_percentage(5.0)
            .case_sensitive(true)
            .build()
            .unwrap();
        let config = parse(&["a.txt", "b.txt"]).apply(&base).unwrap();
        assert_eq!(config, base);
    }

    #[test]
    fn test_invalid_flag_value_is_rejected() {
        let args = parse(&["a.txt", "b.txt", "--tolerance", "101"]);
        let err = args.apply(&AnalysisConfig::default()).unwrap_err();
        assert!(err.to_string().contains("tolerance_percentage"));
    }

    #[test]
    fn test_format_flag() {
        assert_eq!(
            parse(&["a.txt", "b.txt", "--format", "json-pretty"]).format,
            OutputFormat::JsonPretty
        );
        assert_eq!(parse(&["a.txt", "b.txt"]).format, OutputFormat::Console);
    }
}
