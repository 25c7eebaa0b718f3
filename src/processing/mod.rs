//! Transforms from parsed records to chart-ready summaries.
//!
//! This module contains duration conversion, the cost-center join, the
//! filter passes, the three aggregators and the filter option lists. Every
//! function here is a pure transform over borrowed input.

mod cost_center_totals;
mod daily_totals;
mod duration_buckets;
mod filter;
mod join;
mod options;
mod time;

pub use cost_center_totals::aggregate_by_cost_center;
pub use daily_totals::aggregate_by_date_and_type;
pub use duration_buckets::group_by_duration;
pub use filter::{ALL_SENTINEL, FilterCriteria, apply_filters};
pub(crate) use filter::normalize_selection;
pub use join::join_records;
pub use options::{distinct_cost_centers, distinct_dates};
pub use time::parse_time_to_hours;
