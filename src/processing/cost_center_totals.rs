//! Overtime totals per cost center.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::{CostCenterAggregate, JoinedRecord};

use super::parse_time_to_hours;

/// Sums overtime hours and occurrence counts per cost center.
///
/// The result is sorted by total hours, largest first. Cost centers with
/// equal totals keep the order in which they first appear in `records`.
///
/// # Example
///
/// ```
/// use overtime_dashboard::processing::aggregate_by_cost_center;
///
/// assert!(aggregate_by_cost_center(&[]).is_empty());
/// ```
pub fn aggregate_by_cost_center(records: &[JoinedRecord]) -> Vec<CostCenterAggregate> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut aggregates: Vec<CostCenterAggregate> = Vec::new();

    for record in records {
        let hours = parse_time_to_hours(record.occurrence_hours());
        let position = *positions
            .entry(record.cost_center.as_str())
            .or_insert_with(|| {
                aggregates.push(CostCenterAggregate {
                    cost_center: record.cost_center.clone(),
                    total_hours: Decimal::ZERO,
                    occurrence_count: 0,
                });
                aggregates.len() - 1
            });

        let aggregate = &mut aggregates[position];
        aggregate.total_hours += hours;
        aggregate.occurrence_count += 1;
    }

    for aggregate in &mut aggregates {
        aggregate.total_hours = aggregate.total_hours.normalize();
    }

    // sort_by is stable, so ties stay in first-seen order.
    aggregates.sort_by(|a, b| b.total_hours.cmp(&a.total_hours));
    aggregates
}
