//! Option lists for the dashboard's filter controls.

use std::collections::BTreeSet;

use crate::models::JoinedRecord;

/// Returns the distinct cost centers present, sorted ascending.
pub fn distinct_cost_centers(records: &[JoinedRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.cost_center.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Returns the distinct occurrence dates present, sorted ascending.
pub fn distinct_dates(records: &[JoinedRecord]) -> Vec<String> {
    records
        .iter()
        .map(JoinedRecord::date)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
