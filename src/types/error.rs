//! Error types for the settlement engine
//!
//! This module defines all error types that can surface from a batch run.
//! Errors are designed to be descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **CSV Structure Errors**: Malformed CSV, missing required columns
//! - **Operator Input Errors**: Unparsable cutoff date
//!
//! Journal *data* problems (unparsable amounts or dates, unmatched rows)
//! are never errors: they are coerced to neutral defaults by the
//! normalizer or left visible in the summary counts. Only structural
//! malformation of the input and bad operator input are fatal.

use thiserror::Error;

/// Main error type for the settlement engine
///
/// Every variant is fatal: encountering one aborts the batch run and is
/// reported to the caller. Recoverable conditions are handled locally with
/// defaulted values and never reach this enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettlementError {
    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// Raised only for structurally broken CSV (unbalanced quotes,
    /// invalid UTF-8); field-level data problems are coerced instead.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Csv {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// A required column is absent from the input header row
    ///
    /// The run cannot proceed without the full column set; the error names
    /// the first missing field.
    #[error("Input is missing required column '{column}'")]
    MissingColumn {
        /// Name of the absent column
        column: String,
    },

    /// The cutoff date supplied on the command line is unparsable
    ///
    /// Unlike journal data, operator input is not coerced.
    #[error("Invalid cutoff date '{value}': expected DD/MM/YY or YYYY-MM-DD")]
    InvalidCutoff {
        /// The rejected input value
        value: String,
    },
}

// Conversion from io::Error to SettlementError
impl From<std::io::Error> for SettlementError {
    fn from(error: std::io::Error) -> Self {
        SettlementError::Io {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to SettlementError
impl From<csv::Error> for SettlementError {
    fn from(error: csv::Error) -> Self {
        // Extract line number if available
        let line = error.position().map(|pos| pos.line());

        SettlementError::Csv {
            line,
            message: error.to_string(),
        }
    }
}

impl SettlementError {
    /// Create a MissingColumn error
    pub fn missing_column(column: &str) -> Self {
        SettlementError::MissingColumn {
            column: column.to_string(),
        }
    }

    /// Create an InvalidCutoff error
    pub fn invalid_cutoff(value: &str) -> Self {
        SettlementError::InvalidCutoff {
            value: value.to_string(),
        }
    }

    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        SettlementError::FileNotFound {
            path: path.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::file_not_found(
        SettlementError::FileNotFound { path: "journal.csv".to_string() },
        "File not found: journal.csv"
    )]
    #[case::io_error(
        SettlementError::Io { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::csv_with_line(
        SettlementError::Csv { line: Some(42), message: "Invalid field".to_string() },
        "CSV parse error at line 42: Invalid field"
    )]
    #[case::csv_without_line(
        SettlementError::Csv { line: None, message: "Invalid field".to_string() },
        "CSV parse error: Invalid field"
    )]
    #[case::missing_column(
        SettlementError::MissingColumn { column: "lot".to_string() },
        "Input is missing required column 'lot'"
    )]
    #[case::invalid_cutoff(
        SettlementError::InvalidCutoff { value: "yesterday".to_string() },
        "Invalid cutoff date 'yesterday': expected DD/MM/YY or YYYY-MM-DD"
    )]
    fn test_error_display(#[case] error: SettlementError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::missing_column(
        SettlementError::missing_column("piece"),
        SettlementError::MissingColumn { column: "piece".to_string() }
    )]
    #[case::invalid_cutoff(
        SettlementError::invalid_cutoff("32/13/99"),
        SettlementError::InvalidCutoff { value: "32/13/99".to_string() }
    )]
    #[case::file_not_found(
        SettlementError::file_not_found("missing.csv"),
        SettlementError::FileNotFound { path: "missing.csv".to_string() }
    )]
    fn test_helper_functions(#[case] result: SettlementError, #[case] expected: SettlementError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: SettlementError = io_error.into();
        assert!(matches!(error, SettlementError::Io { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}
