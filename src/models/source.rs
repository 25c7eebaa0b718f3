//! Identification of the two source files the dashboard ingests.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of delimited source file being ingested.
///
/// The display form is the conventional file name, used in error and
/// diagnostic messages.
///
/// # Example
///
/// ```
/// use overtime_dashboard::models::SourceKind;
///
/// assert_eq!(SourceKind::CostCenters.to_string(), "cost_centers.csv");
/// assert_eq!(SourceKind::Occurrences.min_fields(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Employee to cost-center assignments.
    CostCenters,
    /// Timestamped overtime occurrences.
    Occurrences,
}

impl SourceKind {
    /// Returns the conventional file name for this source.
    pub fn file_name(&self) -> &'static str {
        match self {
            SourceKind::CostCenters => "cost_centers.csv",
            SourceKind::Occurrences => "occurrences.csv",
        }
    }

    /// Returns the minimum number of fields a data line must carry.
    pub fn min_fields(&self) -> usize {
        match self {
            SourceKind::CostCenters => 4,
            SourceKind::Occurrences => 12,
        }
    }

    /// Returns true if a leading byte-order mark is stripped before parsing.
    ///
    /// Only the cost-center export is produced with a BOM.
    pub fn strips_bom(&self) -> bool {
        matches!(self, SourceKind::CostCenters)
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}
