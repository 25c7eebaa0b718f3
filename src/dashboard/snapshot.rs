//! The computed, chart-ready view of a dashboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{CostCenterAggregate, DailyTypeAggregate, Diagnostic, DurationBucket};
use crate::processing::FilterCriteria;

/// Everything the presentation layer needs to render one dashboard state.
///
/// A snapshot is computed from scratch for the current filter selection and
/// never patched afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// Unique identifier for this snapshot.
    pub snapshot_id: Uuid,
    /// When the snapshot was computed.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that computed the snapshot.
    pub engine_version: String,
    /// The filter selection the aggregates reflect.
    pub filters: FilterCriteria,
    /// Cost-center options for the filter control, over all joined records.
    pub cost_centers: Vec<String>,
    /// Date options for the filter control, over all joined records.
    pub available_dates: Vec<String>,
    /// Overtime-type options for the filter control.
    pub overtime_types: Vec<String>,
    /// Totals per cost center, largest first.
    pub by_cost_center: Vec<CostCenterAggregate>,
    /// The four duration buckets, in fixed order.
    pub duration_buckets: Vec<DurationBucket>,
    /// Hours per date and category, oldest first.
    pub daily_types: Vec<DailyTypeAggregate>,
    /// Number of occurrences behind the aggregates.
    pub total_records: usize,
    /// Diagnostics raised while ingesting the sources.
    pub diagnostics: Vec<Diagnostic>,
    /// Time taken to compute the snapshot, in microseconds.
    pub duration_us: u64,
}

impl DashboardSnapshot {
    /// Serializes the snapshot to JSON for the presentation layer.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
