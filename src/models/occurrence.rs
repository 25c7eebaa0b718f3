//! Overtime occurrence records and the recognized overtime categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The overtime categories retained by the dashboard.
///
/// Only occurrences credited to the hour bank at one of these two rates are
/// ingested; every other status is discarded while parsing. Because
/// [`OccurrenceRecord::status`] has this type, a record with any other status
/// cannot be constructed.
///
/// # Example
///
/// ```
/// use overtime_dashboard::models::OvertimeCategory;
///
/// let category = OvertimeCategory::from_label("Crédito BH 50%");
/// assert_eq!(category, Some(OvertimeCategory::Credit50));
/// assert_eq!(OvertimeCategory::from_label("Débito BH"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OvertimeCategory {
    /// Hour-bank credit at 125%.
    #[serde(rename = "Crédito BH 125%")]
    Credit125,
    /// Hour-bank credit at 50%.
    #[serde(rename = "Crédito BH 50%")]
    Credit50,
}

/// Label of the 125% hour-bank credit status, exactly as exported.
pub const CREDIT_125_LABEL: &str = "Crédito BH 125%";

/// Label of the 50% hour-bank credit status, exactly as exported.
pub const CREDIT_50_LABEL: &str = "Crédito BH 50%";

impl OvertimeCategory {
    /// Every recognized category, in display order.
    pub const ALL: [OvertimeCategory; 2] = [OvertimeCategory::Credit125, OvertimeCategory::Credit50];

    /// Returns the status label as it appears in the occurrence source.
    pub fn label(&self) -> &'static str {
        match self {
            OvertimeCategory::Credit125 => CREDIT_125_LABEL,
            OvertimeCategory::Credit50 => CREDIT_50_LABEL,
        }
    }

    /// Resolves a status label. Matching is exact: no trimming, no case folding.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for OvertimeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single overtime credit event, one line of the occurrence source.
///
/// Date and time fields are kept as the exported strings. Dates are ISO-8601
/// (`YYYY-MM-DD`) so lexicographic order is chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccurrenceRecord {
    /// Identifier of the occurrence in the source system.
    pub record_id: String,
    /// Employee registration key, joined against cost-center records.
    pub employee_key: String,
    /// The employee's name.
    pub name: String,
    /// Occurrence date, `YYYY-MM-DD`.
    pub date: String,
    /// Shift (scale) identifier.
    pub shift: String,
    /// Work schedule code.
    pub schedule_code: String,
    /// Work schedule description.
    pub schedule_description: String,
    /// Start time, `HH:MM:SS`.
    pub start: String,
    /// End time, `HH:MM:SS`.
    pub end: String,
    /// Total worked hours for the day, `HH:MM:SS`.
    pub total_hours: String,
    /// The overtime category.
    pub status: OvertimeCategory,
    /// Overtime credited by this occurrence, `HH:MM:SS`.
    pub occurrence_hours: String,
}

impl OccurrenceRecord {
    /// Builds a record from positional fields.
    ///
    /// Returns `None` when fewer than twelve fields are supplied or when the
    /// status field is not a recognized [`OvertimeCategory`] label.
    pub(crate) fn from_fields(fields: &[String]) -> Option<Self> {
        let [
            record_id,
            employee_key,
            name,
            date,
            shift,
            schedule_code,
            schedule_description,
            start,
            end,
            total_hours,
            status,
            occurrence_hours,
            ..,
        ] = fields
        else {
            return None;
        };

        let status = OvertimeCategory::from_label(status.trim())?;

        Some(Self {
            record_id: record_id.trim().to_string(),
            employee_key: employee_key.trim().to_string(),
            name: name.trim().to_string(),
            date: date.trim().to_string(),
            shift: shift.trim().to_string(),
            schedule_code: schedule_code.trim().to_string(),
            schedule_description: schedule_description.trim().to_string(),
            start: start.trim().to_string(),
            end: end.trim().to_string(),
            total_hours: total_hours.trim().to_string(),
            status,
            occurrence_hours: occurrence_hours.trim().to_string(),
        })
    }
}
