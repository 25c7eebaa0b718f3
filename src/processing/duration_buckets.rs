//! Histogram of occurrences over fixed duration ranges.

use rust_decimal::Decimal;

use crate::models::{DurationBucket, DurationRange, JoinedRecord};

use super::parse_time_to_hours;

const MINUTES_PER_HOUR: i64 = 60;

/// Groups occurrences into the four fixed duration ranges.
///
/// Each occurrence is classified by its converted duration in minutes. All
/// four buckets are always returned, in [`DurationRange::ALL`] order, even
/// when empty.
///
/// # Example
///
/// ```
/// use overtime_dashboard::processing::group_by_duration;
///
/// let buckets = group_by_duration(&[]);
/// assert_eq!(buckets.len(), 4);
/// assert_eq!(buckets[0].label, "< 30 min");
/// assert!(buckets.iter().all(|b| b.size == 0));
/// ```
pub fn group_by_duration(records: &[JoinedRecord]) -> Vec<DurationBucket> {
    let mut buckets: Vec<DurationBucket> =
        DurationRange::ALL.into_iter().map(DurationBucket::empty).collect();

    for record in records {
        let hours = parse_time_to_hours(record.occurrence_hours());
        let range = DurationRange::for_minutes(hours * Decimal::from(MINUTES_PER_HOUR));

        let bucket = &mut buckets[range.index()];
        bucket.hours += hours;
        bucket.occurrences += 1;
        bucket.size = bucket.occurrences;
    }

    for bucket in &mut buckets {
        bucket.hours = bucket.hours.normalize();
    }

    buckets
}
