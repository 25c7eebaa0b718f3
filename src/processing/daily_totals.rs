//! Overtime hours per date, split by category.

use std::collections::BTreeMap;

use crate::models::{DailyTypeAggregate, JoinedRecord};

use super::parse_time_to_hours;

/// Sums overtime hours per date and category.
///
/// One entry is produced per distinct date, in ascending lexicographic date
/// order. A category absent on a date reports zero hours.
///
/// # Example
///
/// ```
/// use overtime_dashboard::processing::aggregate_by_date_and_type;
///
/// assert!(aggregate_by_date_and_type(&[]).is_empty());
/// ```
pub fn aggregate_by_date_and_type(records: &[JoinedRecord]) -> Vec<DailyTypeAggregate> {
    let mut by_date: BTreeMap<&str, DailyTypeAggregate> = BTreeMap::new();

    for record in records {
        let hours = parse_time_to_hours(record.occurrence_hours());
        by_date
            .entry(record.date())
            .or_insert_with(|| DailyTypeAggregate::new(record.date()))
            .add(record.status(), hours);
    }

    by_date
        .into_values()
        .map(DailyTypeAggregate::normalized)
        .collect()
}
