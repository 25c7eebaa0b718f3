//! Occurrences enriched with their employee's cost center.

use serde::{Deserialize, Serialize};

use super::{CostCenterRecord, OccurrenceRecord, OvertimeCategory};

/// An occurrence joined to the cost-center record of its employee.
///
/// Serializes flat: the occurrence fields followed by the cost-center fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinedRecord {
    /// The underlying occurrence.
    #[serde(flatten)]
    pub occurrence: OccurrenceRecord,
    /// The cost-center code of the occurrence's employee.
    pub cost_center: String,
    /// The cost-center description of the occurrence's employee.
    pub cost_center_description: String,
}

impl JoinedRecord {
    /// Attaches cost-center attributes to an occurrence.
    pub fn new(occurrence: OccurrenceRecord, cost_center: &CostCenterRecord) -> Self {
        Self {
            occurrence,
            cost_center: cost_center.cost_center.clone(),
            cost_center_description: cost_center.cost_center_description.clone(),
        }
    }

    /// Returns the occurrence date.
    pub fn date(&self) -> &str {
        &self.occurrence.date
    }

    /// Returns the overtime category.
    pub fn status(&self) -> OvertimeCategory {
        self.occurrence.status
    }

    /// Returns the raw `HH:MM:SS` overtime duration.
    pub fn occurrence_hours(&self) -> &str {
        &self.occurrence.occurrence_hours
    }
}

#[cfg(test)]
impl JoinedRecord {
    /// Builds a joined record with only the fields the transforms read.
    pub(crate) fn fixture(
        record_id: &str,
        cost_center: &str,
        date: &str,
        status: OvertimeCategory,
        occurrence_hours: &str,
    ) -> Self {
        let occurrence = OccurrenceRecord {
            record_id: record_id.to_string(),
            employee_key: "1".to_string(),
            name: "Ana".to_string(),
            date: date.to_string(),
            shift: String::new(),
            schedule_code: String::new(),
            schedule_description: String::new(),
            start: String::new(),
            end: String::new(),
            total_hours: String::new(),
            status,
            occurrence_hours: occurrence_hours.to_string(),
        };
        let cost_center = CostCenterRecord {
            employee_key: "1".to_string(),
            name: "Ana".to_string(),
            cost_center: cost_center.to_string(),
            cost_center_description: String::new(),
        };
        Self::new(occurrence, &cost_center)
    }
}
