//! Inner join of occurrences to cost-center assignments.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::models::{CostCenterRecord, Diagnostic, JoinedRecord, OccurrenceRecord, Parsed};

/// Joins occurrences to their employee's cost-center record.
///
/// A lookup keyed by employee key is built first; when several cost-center
/// records share a key the last one wins. Occurrences are then scanned in
/// order: resolved ones become [`JoinedRecord`]s, unresolved ones are dropped
/// and reported as [`Diagnostic::UnresolvedJoinKey`]. Output order follows
/// the occurrence order.
///
/// # Example
///
/// ```
/// use overtime_dashboard::parsing::{parse_cost_centers, parse_occurrences};
/// use overtime_dashboard::processing::join_records;
///
/// let cost_centers = parse_cost_centers("k,n,c,d\n1001,Ana,CC-10,Assembly\n")?;
/// let occurrences = parse_occurrences(concat!(
///     "a,b,c,d,e,f,g,h,i,j,k,l\n",
///     "R-1,1001,Ana,2024-03-04,E,H,D,08:00:00,18:00:00,09:00:00,Crédito BH 50%,01:00:00\n",
///     "R-2,9999,Zé,2024-03-04,E,H,D,08:00:00,18:00:00,09:00:00,Crédito BH 50%,01:00:00\n",
/// ))?;
///
/// let joined = join_records(&cost_centers.records, &occurrences.records);
/// assert_eq!(joined.records.len(), 1);
/// assert_eq!(joined.records[0].cost_center, "CC-10");
/// assert_eq!(joined.count_of("unresolved_join_key"), 1);
/// # Ok::<(), overtime_dashboard::error::DashboardError>(())
/// ```
pub fn join_records(
    cost_centers: &[CostCenterRecord],
    occurrences: &[OccurrenceRecord],
) -> Parsed<JoinedRecord> {
    let lookup: HashMap<&str, &CostCenterRecord> = cost_centers
        .iter()
        .map(|record| (record.employee_key.as_str(), record))
        .collect();

    let mut records = Vec::with_capacity(occurrences.len());
    let mut diagnostics = Vec::new();

    for occurrence in occurrences {
        match lookup.get(occurrence.employee_key.as_str()) {
            Some(cost_center) => {
                records.push(JoinedRecord::new(occurrence.clone(), cost_center));
            }
            None => {
                warn!(
                    record_id = %occurrence.record_id,
                    employee_key = %occurrence.employee_key,
                    "Cost center not found for employee"
                );
                diagnostics.push(Diagnostic::UnresolvedJoinKey {
                    record_id: occurrence.record_id.clone(),
                    employee_key: occurrence.employee_key.clone(),
                });
            }
        }
    }

    debug!(
        joined = records.len(),
        unresolved = diagnostics.len(),
        "Joined occurrences to cost centers"
    );

    Parsed {
        records,
        diagnostics,
    }
}
