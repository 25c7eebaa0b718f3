//! Non-fatal ingestion diagnostics.
//!
//! Diagnostics report rows that were skipped and occurrences that could not
//! be joined. They travel next to results, never through the error channel,
//! so a handful of dirty rows does not abort a whole dashboard.

use serde::{Deserialize, Serialize};

use super::SourceKind;

/// A problem found while ingesting source data that did not stop ingestion.
///
/// # Example
///
/// ```
/// use overtime_dashboard::models::{Diagnostic, SourceKind};
///
/// let diagnostic = Diagnostic::MalformedLine {
///     source: SourceKind::CostCenters,
///     line_number: 3,
///     field_count: 2,
///     required: 4,
/// };
/// assert_eq!(diagnostic.code(), "malformed_line");
/// assert_eq!(
///     diagnostic.message(),
///     "cost_centers.csv line 3: expected at least 4 fields, found 2"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A data line had too few fields and was skipped.
    MalformedLine {
        /// The source containing the line.
        source: SourceKind,
        /// 1-based line number among non-blank lines, header included.
        line_number: usize,
        /// Number of fields found on the line.
        field_count: usize,
        /// Minimum number of fields required.
        required: usize,
    },
    /// An occurrence's employee has no cost-center record; it was dropped.
    UnresolvedJoinKey {
        /// Identifier of the dropped occurrence.
        record_id: String,
        /// The employee key that did not resolve.
        employee_key: String,
    },
    /// The occurrence source held no credit occurrences.
    NoCreditOccurrences {
        /// Number of data lines that parsed before category filtering.
        parsed_lines: usize,
    },
}

impl Diagnostic {
    /// Returns a stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Diagnostic::MalformedLine { .. } => "malformed_line",
            Diagnostic::UnresolvedJoinKey { .. } => "unresolved_join_key",
            Diagnostic::NoCreditOccurrences { .. } => "no_credit_occurrences",
        }
    }

    /// Returns a human-readable description.
    pub fn message(&self) -> String {
        match self {
            Diagnostic::MalformedLine {
                source,
                line_number,
                field_count,
                required,
            } => format!(
                "{source} line {line_number}: expected at least {required} fields, found {field_count}"
            ),
            Diagnostic::UnresolvedJoinKey {
                record_id,
                employee_key,
            } => format!(
                "occurrence {record_id}: no cost center found for employee {employee_key}"
            ),
            Diagnostic::NoCreditOccurrences { parsed_lines } => format!(
                "{} has no credit occurrences among {parsed_lines} parsed lines",
                SourceKind::Occurrences
            ),
        }
    }
}

/// Records produced by a parse or join step, with the diagnostics it raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed<T> {
    /// The records that survived.
    pub records: Vec<T>,
    /// Issues found along the way, in encounter order.
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Parsed<T> {
    /// Returns the number of diagnostics with the given code.
    pub fn count_of(&self, code: &str) -> usize {
        self.diagnostics.iter().filter(|d| d.code() == code).count()
    }
}
