//! Narrowing of joined records by the dashboard's filter controls.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::JoinedRecord;

/// The selection value meaning "do not filter on this field".
pub const ALL_SENTINEL: &str = "all";

/// The active filter selection.
///
/// Each field is optional; `None` or [`ALL_SENTINEL`] disables that
/// predicate. Dates are ISO-8601 strings compared lexicographically, with
/// inclusive bounds on both ends.
///
/// # Example
///
/// ```
/// use overtime_dashboard::processing::FilterCriteria;
///
/// let criteria = FilterCriteria {
///     cost_center: Some("all".to_string()),
///     start_date: Some("2024-03-01".to_string()),
///     ..FilterCriteria::default()
/// };
/// assert_eq!(criteria.cost_center(), None);
/// assert_eq!(criteria.start_date(), Some("2024-03-01"));
/// assert!(criteria.is_active());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Cost-center code to keep.
    #[serde(default)]
    pub cost_center: Option<String>,
    /// Overtime category label to keep.
    #[serde(default)]
    pub overtime_type: Option<String>,
    /// Earliest date to keep, inclusive.
    #[serde(default)]
    pub start_date: Option<String>,
    /// Latest date to keep, inclusive.
    #[serde(default)]
    pub end_date: Option<String>,
}

impl FilterCriteria {
    /// Returns the effective cost-center predicate.
    pub fn cost_center(&self) -> Option<&str> {
        active(&self.cost_center)
    }

    /// Returns the effective overtime-type predicate.
    pub fn overtime_type(&self) -> Option<&str> {
        active(&self.overtime_type)
    }

    /// Returns the effective lower date bound.
    pub fn start_date(&self) -> Option<&str> {
        active(&self.start_date)
    }

    /// Returns the effective upper date bound.
    pub fn end_date(&self) -> Option<&str> {
        active(&self.end_date)
    }

    /// Returns true if any predicate is enabled.
    pub fn is_active(&self) -> bool {
        self.cost_center().is_some()
            || self.overtime_type().is_some()
            || self.start_date().is_some()
            || self.end_date().is_some()
    }
}

fn active(value: &Option<String>) -> Option<&str> {
    normalize_selection(value.as_deref())
}

/// Trims a selection value; blank values and the "all" sentinel become `None`.
pub(crate) fn normalize_selection(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != ALL_SENTINEL)
}

/// Applies the filter selection to joined records.
///
/// Predicates run as independent narrowing passes in the order cost center,
/// overtime type, date range. Surviving records keep their input order.
///
/// # Example
///
/// ```
/// use overtime_dashboard::processing::{apply_filters, FilterCriteria};
///
/// let filtered = apply_filters(&[], &FilterCriteria::default());
/// assert!(filtered.is_empty());
/// ```
pub fn apply_filters(records: &[JoinedRecord], criteria: &FilterCriteria) -> Vec<JoinedRecord> {
    let mut filtered: Vec<&JoinedRecord> = records.iter().collect();

    if let Some(cost_center) = criteria.cost_center() {
        filtered.retain(|r| r.cost_center == cost_center);
    }

    if let Some(overtime_type) = criteria.overtime_type() {
        filtered.retain(|r| r.status().label() == overtime_type);
    }

    let (start, end) = (criteria.start_date(), criteria.end_date());
    if start.is_some() || end.is_some() {
        filtered.retain(|r| {
            let date = r.date();
            start.is_none_or(|s| date >= s) && end.is_none_or(|e| date <= e)
        });
    }

    debug!(
        input = records.len(),
        output = filtered.len(),
        "Applied filters"
    );

    filtered.into_iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OvertimeCategory;

    fn record(id: &str, center: &str, status: OvertimeCategory, date: &str) -> JoinedRecord {
        JoinedRecord::fixture(id, center, date, status, "01:00:00")
    }

    fn sample() -> Vec<JoinedRecord> {
        vec![
            record("R-1", "CC-A", OvertimeCategory::Credit125, "2024-03-01"),
            record("R-2", "CC-B", OvertimeCategory::Credit50, "2024-03-02"),
            record("R-3", "CC-A", OvertimeCategory::Credit50, "2024-03-03"),
            record("R-4", "CC-A", OvertimeCategory::Credit125, "2024-03-04"),
        ]
    }

    fn ids(records: &[JoinedRecord]) -> Vec<&str> {
        records
            .iter()
            .map(|r| r.occurrence.record_id.as_str())
            .collect()
    }

    #[test]
    fn test_no_criteria_keeps_everything() {
        let records = sample();
        assert_eq!(apply_filters(&records, &FilterCriteria::default()), records);
    }

    #[test]
    fn test_all_sentinel_disables_predicates() {
        let criteria = FilterCriteria {
            cost_center: Some(ALL_SENTINEL.to_string()),
            overtime_type: Some(ALL_SENTINEL.to_string()),
            ..FilterCriteria::default()
        };
        assert!(!criteria.is_active());
        assert_eq!(apply_filters(&sample(), &criteria).len(), 4);
    }

    #[test]
    fn test_padded_values_are_trimmed() {
        let criteria = FilterCriteria {
            cost_center: Some(" all ".to_string()),
            overtime_type: Some("  ".to_string()),
            start_date: Some(" 2024-03-03 ".to_string()),
            end_date: None,
        };
        assert_eq!(criteria.cost_center(), None);
        assert_eq!(criteria.overtime_type(), None);
        assert_eq!(ids(&apply_filters(&sample(), &criteria)), vec!["R-3", "R-4"]);
    }

    #[test]
    fn test_cost_center_filter() {
        let criteria = FilterCriteria {
            cost_center: Some("CC-A".to_string()),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&apply_filters(&sample(), &criteria)), vec!["R-1", "R-3", "R-4"]);
    }

    #[test]
    fn test_overtime_type_filter_matches_label() {
        let criteria = FilterCriteria {
            overtime_type: Some("Crédito BH 50%".to_string()),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&apply_filters(&sample(), &criteria)), vec!["R-2", "R-3"]);
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let criteria = FilterCriteria {
            start_date: Some("2024-03-02".to_string()),
            end_date: Some("2024-03-03".to_string()),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&apply_filters(&sample(), &criteria)), vec!["R-2", "R-3"]);
    }

    #[test]
    fn test_open_ended_date_ranges() {
        let from = FilterCriteria {
            start_date: Some("2024-03-03".to_string()),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&apply_filters(&sample(), &from)), vec!["R-3", "R-4"]);

        let until = FilterCriteria {
            end_date: Some("2024-03-01".to_string()),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&apply_filters(&sample(), &until)), vec!["R-1"]);
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let criteria = FilterCriteria {
            start_date: Some("2024-03-04".to_string()),
            end_date: Some("2024-03-01".to_string()),
            ..FilterCriteria::default()
        };
        assert!(apply_filters(&sample(), &criteria).is_empty());
    }

    #[test]
    fn test_combined_filters() {
        let criteria = FilterCriteria {
            cost_center: Some("CC-A".to_string()),
            overtime_type: Some("Crédito BH 125%".to_string()),
            start_date: Some("2024-03-02".to_string()),
            end_date: None,
        };
        assert_eq!(ids(&apply_filters(&sample(), &criteria)), vec!["R-4"]);
    }

    #[test]
    fn test_criteria_deserialize_with_missing_fields() {
        let criteria: FilterCriteria = serde_json::from_str(r#"{"cost_center":"CC-A"}"#).unwrap();
        assert_eq!(criteria.cost_center(), Some("CC-A"));
        assert_eq!(criteria.end_date(), None);
    }
}
