//! Unified error hierarchy for fitcalc
//!
//! Dispatch failures are recoverable and reported per package; input and
//! configuration failures abort the run.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for all fitcalc operations
#[derive(Debug, Error)]
pub enum FitCalcError {
    /// Workout dispatch errors
    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// Package input errors
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Errors raised while turning a tag and readings into a workout
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    /// Tag is not one of SWM, RUN, WLK
    #[error("Unknown workout type: {tag}")]
    UnknownWorkoutType { tag: String },

    /// Reading count does not match the tag
    #[error("Workout type {tag} expects {expected} readings, got {actual}")]
    ArityMismatch {
        tag: String,
        expected: usize,
        actual: usize,
    },

    /// A reading violates its precondition
    #[error("Invalid reading {field}={value}: {reason}")]
    InvalidReading {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// Errors raised while loading packages from a file
#[derive(Debug, Error)]
pub enum InputError {
    /// File extension has no matching reader
    #[error("Unsupported format: {path}")]
    UnsupportedFormat { path: PathBuf },

    /// Format-specific parsing error
    #[error("Parse error in {format}: {reason}")]
    Parse { format: String, reason: String },

    /// Could not read the file
    #[error("Could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for fitcalc operations
pub type Result<T> = std::result::Result<T, FitCalcError>;

impl FitCalcError {
    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FitCalcError::Dispatch(_) => ErrorSeverity::Warning,
            FitCalcError::Input(InputError::UnsupportedFormat { .. }) => ErrorSeverity::Warning,
            FitCalcError::Configuration(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::Error,
        }
    }

    /// Emit this error as a tracing event at its severity
    pub fn log(&self) {
        match self.severity() {
            ErrorSeverity::Critical => {
                tracing::error!(error = %self, critical = true, "fitcalc run failed")
            }
            ErrorSeverity::Error => tracing::error!(error = %self, "fitcalc run failed"),
            ErrorSeverity::Warning => tracing::warn!(error = %self, "fitcalc run failed"),
        }
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            FitCalcError::Dispatch(err) => err.user_message(),
            FitCalcError::Input(InputError::UnsupportedFormat { path }) => {
                format!(
                    "Cannot read packages from {}: use a .csv or .json file",
                    path.display()
                )
            }
            FitCalcError::Input(InputError::Io { path, .. }) => {
                format!("Could not open package file: {}", path.display())
            }
            _ => self.to_string(),
        }
    }
}

impl DispatchError {
    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            DispatchError::UnknownWorkoutType { tag } => {
                format!("'{}' is not a known workout type (expected SWM, RUN or WLK)", tag)
            }
            DispatchError::ArityMismatch {
                tag,
                expected,
                actual,
            } => format!(
                "{} needs {} sensor readings but {} were supplied",
                tag, expected, actual
            ),
            DispatchError::InvalidReading { .. } => self.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Run cannot continue
    Critical,
    /// Error that prevents operation but system can continue
    Error,
    /// Warning that doesn't prevent operation
    Warning,
}
