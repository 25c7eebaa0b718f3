//! Error types for the overtime dashboard engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the structural failures that abort ingestion. Per-line and per-join
//! problems are not errors; they are reported as [`Diagnostic`] values.
//!
//! [`Diagnostic`]: crate::models::Diagnostic

use thiserror::Error;

use crate::models::SourceKind;

/// The main error type for the overtime dashboard engine.
///
/// # Example
///
/// ```
/// use overtime_dashboard::error::DashboardError;
/// use overtime_dashboard::models::SourceKind;
///
/// let error = DashboardError::EmptyInput {
///     kind: SourceKind::CostCenters,
/// };
/// assert_eq!(error.to_string(), "Source file cost_centers.csv is empty");
/// ```
#[derive(Debug, Error)]
pub enum DashboardError {
    /// A source file contained no non-blank lines.
    #[error("Source file {kind} is empty")]
    EmptyInput {
        /// The source that was empty.
        kind: SourceKind,
    },

    /// The cost-center source parsed but produced no usable records.
    #[error("No records found in cost_centers.csv")]
    NoCostCenterRecords,

    /// The occurrence source produced no credit occurrences after filtering.
    #[error("No credit occurrences found in occurrences.csv")]
    NoCreditOccurrences,

    /// A source file could not be read from disk.
    #[error("Failed to read source file '{path}': {message}")]
    SourceUnreadable {
        /// The path that could not be read.
        path: String,
        /// The underlying I/O error message.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return DashboardError.
pub type DashboardResult<T> = Result<T, DashboardError>;
