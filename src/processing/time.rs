//! Conversion of `HH:MM:SS` duration strings to decimal hours.

use rust_decimal::Decimal;

const SECONDS_PER_HOUR: i64 = 3600;

/// Converts an `HH:MM:SS` duration to decimal hours.
///
/// The result is `H + M/60 + S/3600`. This function is total: blank input,
/// input without exactly three colon-separated parts, and parts that are not
/// non-negative integers all contribute zero instead of failing. Dirty
/// durations therefore undercount rather than abort an aggregation.
///
/// # Examples
///
/// ```
/// use overtime_dashboard::processing::parse_time_to_hours;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(parse_time_to_hours("01:30:00"), Decimal::from_str("1.5").unwrap());
/// assert_eq!(parse_time_to_hours(""), Decimal::ZERO);
/// assert_eq!(parse_time_to_hours("1:2"), Decimal::ZERO);
/// ```
pub fn parse_time_to_hours(time: &str) -> Decimal {
    if time.trim().is_empty() {
        return Decimal::ZERO;
    }

    let parts: Vec<&str> = time.split(':').collect();
    let [hours, minutes, seconds] = parts.as_slice() else {
        return Decimal::ZERO;
    };

    let total_seconds = parse_part(hours) * SECONDS_PER_HOUR
        + parse_part(minutes) * 60
        + parse_part(seconds);

    (Decimal::from(total_seconds) / Decimal::from(SECONDS_PER_HOUR)).normalize()
}

/// Parses one duration component, treating anything unparseable as zero.
fn parse_part(part: &str) -> i64 {
    part.trim().parse::<u32>().map(i64::from).unwrap_or(0)
}
