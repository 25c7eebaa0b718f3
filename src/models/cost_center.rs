//! Cost-center assignment records.

use serde::{Deserialize, Serialize};

/// An employee's cost-center assignment, one line of the cost-center source.
///
/// Records are keyed by `employee_key`. Uniqueness is assumed, not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostCenterRecord {
    /// The employee registration key shared with occurrence records.
    pub employee_key: String,
    /// The employee's name.
    pub name: String,
    /// The cost-center code the employee is assigned to.
    pub cost_center: String,
    /// The human-readable cost-center description.
    pub cost_center_description: String,
}

impl CostCenterRecord {
    /// Builds a record from positional fields.
    ///
    /// Returns `None` when fewer than four fields are supplied.
    pub(crate) fn from_fields(fields: &[String]) -> Option<Self> {
        match fields {
            [employee_key, name, cost_center, cost_center_description, ..] => Some(Self {
                employee_key: employee_key.trim().to_string(),
                name: name.trim().to_string(),
                cost_center: cost_center.trim().to_string(),
                cost_center_description: cost_center_description.trim().to_string(),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_from_fields_maps_positions() {
        let record =
            CostCenterRecord::from_fields(&fields(&["1001", "Ana Souza", "CC-10", "Assembly"]))
                .unwrap();

        assert_eq!(record.employee_key, "1001");
        assert_eq!(record.name, "Ana Souza");
        assert_eq!(record.cost_center, "CC-10");
        assert_eq!(record.cost_center_description, "Assembly");
    }

    #[test]
    fn test_from_fields_ignores_extra_columns() {
        let record =
            CostCenterRecord::from_fields(&fields(&["1001", "Ana", "CC-10", "Assembly", "x"]));
        assert!(record.is_some());
    }

    #[test]
    fn test_from_fields_rejects_short_rows() {
        assert!(CostCenterRecord::from_fields(&fields(&["1001", "Ana"])).is_none());
    }
}
