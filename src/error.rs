//! Error types with contextual suggestions
//!
//! Provides structured error types that include:
//! - Actionable error messages
//! - Suggested fixes
//! - Proper exit codes for CI/CD
//!
//! Building a report never fails; every variant here comes from loading
//! inputs or validating configuration before the report is built.
//!
//! # Examples
//!
//! ```
//! use pkg_size_report::config::UnchangedFilesMode;
//! use pkg_size_report::error::ReportError;
//!
//! let err = "sometimes".parse::<UnchangedFilesMode>().unwrap_err();
//! assert!(matches!(err, ReportError::InvalidOption { .. }));
//! assert_eq!(err.exit_code(), 64);
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while preparing a size report
#[derive(Error, Debug)]
pub enum ReportError {
    /// Input file not found
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path to missing file
        path: PathBuf,
        /// What the file was needed for
        operation: String,
    },

    /// Snapshot file could not be parsed or is malformed
    #[error("Invalid snapshot {path}: {reason}")]
    InvalidSnapshot {
        /// Path to the snapshot file
        path: PathBuf,
        /// Parse or validation failure
        reason: String,
    },

    /// Unknown value for an enumerated option
    #[error("Invalid value '{value}' for {option}")]
    InvalidOption {
        /// Option name, as spelled on the command line
        option: String,
        /// Rejected value
        value: String,
        /// Accepted values
        valid_values: Vec<String>,
    },

    /// Glob pattern does not compile
    #[error("Invalid glob pattern '{pattern}': {reason}")]
    InvalidGlob {
        /// Pattern as written
        pattern: String,
        /// Compiler message
        reason: String,
    },

    /// Refusing to overwrite an existing configuration file
    #[error("Configuration file already exists: {path}")]
    ConfigExists {
        /// Path to the existing file
        path: PathBuf,
    },

    /// Generic I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// Context about where the error occurred
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },
}

impl ReportError {
    /// Get actionable suggestion for resolving this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use pkg_size_report::error::ReportError;
    ///
    /// let error = ReportError::InvalidOption {
    ///     option: "--sort-order".to_string(),
    ///     value: "up".to_string(),
    ///     valid_values: vec!["asc".to_string(), "desc".to_string()],
    /// };
    ///
    /// assert_eq!(error.suggestion().unwrap(), "Valid values for --sort-order: asc, desc");
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::FileNotFound { path, operation } => Some(format!(
                "Ensure {} exists before running {}",
                path.display(),
                operation
            )),
            Self::InvalidSnapshot { .. } => Some(
                "Snapshots are JSON objects with \"ref\", \"tarballSize\" and \"files\" keys"
                    .to_string(),
            ),
            Self::InvalidOption {
                option,
                valid_values,
                ..
            } => Some(format!(
                "Valid values for {}: {}",
                option,
                valid_values.join(", ")
            )),
            Self::InvalidGlob { .. } => Some(
                "Close every '{' and '[' group; match them literally with '[{]' or '[[]'"
                    .to_string(),
            ),
            Self::ConfigExists { .. } => {
                Some("Pass --force to overwrite, or edit the file manually".to_string())
            }
            Self::Io { context, .. } => Some(format!(
                "Check file permissions and that {} is accessible",
                context
            )),
        }
    }

    /// Get appropriate exit code for this error.
    ///
    /// Returns Unix-style exit codes following sysexits.h conventions.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. } => 66,    // EX_NOINPUT
            Self::InvalidSnapshot { .. } => 65, // EX_DATAERR
            Self::InvalidOption { .. } => 64,   // EX_USAGE
            Self::InvalidGlob { .. } => 64,     // EX_USAGE
            Self::ConfigExists { .. } => 73,    // EX_CANTCREAT
            Self::Io { .. } => 74,              // EX_IOERR
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with its cause chain and suggestion
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        if let Some(report_error) = Self::find(error) {
            if let Some(suggestion) = report_error.suggestion() {
                output.push_str(&format!(
                    "\n{} {}\n",
                    style("help:").cyan().bold(),
                    suggestion
                ));
            }
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        Self::find(error).map_or(1, ReportError::exit_code)
    }

    /// First `ReportError` in the chain, context layers included
    fn find(error: &anyhow::Error) -> Option<&ReportError> {
        error.chain().find_map(|e| e.downcast_ref::<ReportError>())
    }
}
