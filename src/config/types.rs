//! Configuration types for the dashboard.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use std::path::PathBuf;

use serde::Deserialize;

use crate::processing::FilterCriteria;

/// Locations of the two source files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourcePaths {
    /// Path to the cost-center assignment export.
    pub cost_centers: PathBuf,
    /// Path to the overtime occurrence export.
    pub occurrences: PathBuf,
}

/// The complete dashboard configuration loaded from YAML.
///
/// # Example
///
/// ```
/// use overtime_dashboard::config::DashboardConfig;
///
/// let yaml = r#"
/// sources:
///   cost_centers: data/cost_centers.csv
///   occurrences: data/occurrences.csv
/// filters:
///   cost_center: CC-10
/// "#;
/// let config: DashboardConfig = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(config.filters.cost_center(), Some("CC-10"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DashboardConfig {
    /// Source file locations.
    pub sources: SourcePaths,
    /// Initial filter selection. Defaults to no filtering.
    #[serde(default)]
    pub filters: FilterCriteria,
}
