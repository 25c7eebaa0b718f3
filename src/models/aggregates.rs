//! Chart-ready aggregate shapes produced from joined records.
//!
//! All hour values are non-negative [`Decimal`] hours and serialize as
//! strings, like every other hour value in the crate.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::OvertimeCategory;

/// Overtime totals for one cost center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostCenterAggregate {
    /// The cost-center code.
    pub cost_center: String,
    /// Sum of overtime hours credited in this cost center.
    pub total_hours: Decimal,
    /// Number of occurrences contributing to the total.
    pub occurrence_count: usize,
}

/// One of the four fixed duration ranges used to histogram occurrences.
///
/// Ranges are half-open in minutes and together cover `[0, ∞)`.
///
/// # Example
///
/// ```
/// use overtime_dashboard::models::DurationRange;
/// use rust_decimal::Decimal;
///
/// assert_eq!(DurationRange::for_minutes(Decimal::from(29)), DurationRange::UnderThirtyMinutes);
/// assert_eq!(DurationRange::for_minutes(Decimal::from(30)), DurationRange::ThirtyMinutesToOneHour);
/// assert_eq!(DurationRange::for_minutes(Decimal::from(120)), DurationRange::TwoHoursOrMore);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationRange {
    /// `[0, 30)` minutes.
    UnderThirtyMinutes,
    /// `[30, 60)` minutes.
    ThirtyMinutesToOneHour,
    /// `[60, 120)` minutes.
    OneHourToTwoHours,
    /// `[120, ∞)` minutes.
    TwoHoursOrMore,
}

impl DurationRange {
    /// Every range, in chart order.
    pub const ALL: [DurationRange; 4] = [
        DurationRange::UnderThirtyMinutes,
        DurationRange::ThirtyMinutesToOneHour,
        DurationRange::OneHourToTwoHours,
        DurationRange::TwoHoursOrMore,
    ];

    /// Returns the chart label of the range.
    pub fn label(&self) -> &'static str {
        match self {
            DurationRange::UnderThirtyMinutes => "< 30 min",
            DurationRange::ThirtyMinutesToOneHour => "30 min - 1h",
            DurationRange::OneHourToTwoHours => "1h - 1h59min",
            DurationRange::TwoHoursOrMore => ">= 2h",
        }
    }

    /// Classifies a duration given in minutes.
    pub fn for_minutes(minutes: Decimal) -> Self {
        if minutes < Decimal::from(30) {
            DurationRange::UnderThirtyMinutes
        } else if minutes < Decimal::from(60) {
            DurationRange::ThirtyMinutesToOneHour
        } else if minutes < Decimal::from(120) {
            DurationRange::OneHourToTwoHours
        } else {
            DurationRange::TwoHoursOrMore
        }
    }

    /// Position of the range within [`DurationRange::ALL`].
    pub(crate) fn index(&self) -> usize {
        match self {
            DurationRange::UnderThirtyMinutes => 0,
            DurationRange::ThirtyMinutesToOneHour => 1,
            DurationRange::OneHourToTwoHours => 2,
            DurationRange::TwoHoursOrMore => 3,
        }
    }
}

impl fmt::Display for DurationRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Occurrence totals for one duration range.
///
/// `size` always equals `occurrences`; it is the area weight used by
/// proportional-area charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationBucket {
    /// The range this bucket covers.
    pub range: DurationRange,
    /// The chart label of the range.
    pub label: String,
    /// Area weight, equal to the occurrence count.
    pub size: usize,
    /// Sum of overtime hours in this range.
    pub hours: Decimal,
    /// Number of occurrences in this range.
    pub occurrences: usize,
}

impl DurationBucket {
    /// Creates an empty bucket for a range.
    pub fn empty(range: DurationRange) -> Self {
        Self {
            range,
            label: range.label().to_string(),
            size: 0,
            hours: Decimal::ZERO,
            occurrences: 0,
        }
    }
}

/// Overtime hours on one date, split by category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTypeAggregate {
    /// The date, `YYYY-MM-DD`.
    pub date: String,
    /// Hours credited at 125% on this date.
    #[serde(rename = "Crédito BH 125%")]
    pub credit_125_hours: Decimal,
    /// Hours credited at 50% on this date.
    #[serde(rename = "Crédito BH 50%")]
    pub credit_50_hours: Decimal,
}

impl DailyTypeAggregate {
    /// Creates a zeroed aggregate for a date.
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            credit_125_hours: Decimal::ZERO,
            credit_50_hours: Decimal::ZERO,
        }
    }

    /// Returns the hours recorded for a category.
    pub fn hours_for(&self, category: OvertimeCategory) -> Decimal {
        match category {
            OvertimeCategory::Credit125 => self.credit_125_hours,
            OvertimeCategory::Credit50 => self.credit_50_hours,
        }
    }

    /// Adds hours to a category's running total.
    pub(crate) fn add(&mut self, category: OvertimeCategory, hours: Decimal) {
        match category {
            OvertimeCategory::Credit125 => self.credit_125_hours += hours,
            OvertimeCategory::Credit50 => self.credit_50_hours += hours,
        }
    }

    pub(crate) fn normalized(self) -> Self {
        Self {
            credit_125_hours: self.credit_125_hours.normalize(),
            credit_50_hours: self.credit_50_hours.normalize(),
            ..self
        }
    }
}
