use thiserror::Error;

/// Errors raised while constructing an [`AnalysisConfig`](crate::AnalysisConfig)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid config: {field} must be within {min}..={max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Errors that abort an analysis call
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("At least 2 records required for comparison, got {found}")]
    InsufficientInputs { found: usize },

    #[error("Detailed change analysis compares exactly 2 records, got {found}")]
    PairRequired { found: usize },

    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_inputs_message() {
        let err = AnalysisError::InsufficientInputs { found: 1 };
        assert_eq!(
            err.to_string(),
            "At least 2 records required for comparison, got 1"
        );
    }

    #[test]
    fn test_config_error_converts() {
        let err: AnalysisError = ConfigError::OutOfRange {
            field: "tolerance_percentage",
            value: 120.0,
            min: 0.0,
            max: 100.0,
        }
        .into();
        assert!(err.to_string().contains("tolerance_percentage"));
    }
}
