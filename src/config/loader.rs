//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the dashboard
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{DashboardError, DashboardResult};

use super::types::DashboardConfig;

/// Loads and provides access to the dashboard configuration.
///
/// Relative source paths in the file are resolved against the directory
/// containing the configuration file.
///
/// # File Structure
///
/// ```text
/// sources:
///   cost_centers: data/cost_centers.csv
///   occurrences: data/occurrences.csv
/// filters:
///   overtime_type: "Crédito BH 50%"
///   start_date: "2024-03-01"
/// ```
///
/// # Example
///
/// ```no_run
/// use overtime_dashboard::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/dashboard.yaml")?;
/// println!("Cost centers: {}", loader.config().sources.cost_centers.display());
/// # Ok::<(), overtime_dashboard::error::DashboardError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: DashboardConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing or unreadable ([`DashboardError::ConfigNotFound`])
    /// - The file contains invalid YAML or misses required fields
    ///   ([`DashboardError::ConfigParseError`])
    pub fn load<P: AsRef<Path>>(path: P) -> DashboardResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| DashboardError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let mut config = Self::parse(&content, &path_str)?;

        if let Some(base) = path.parent() {
            config.sources.cost_centers = base.join(&config.sources.cost_centers);
            config.sources.occurrences = base.join(&config.sources.occurrences);
        }

        debug!(
            path = %path_str,
            cost_centers = %config.sources.cost_centers.display(),
            occurrences = %config.sources.occurrences.display(),
            "Loaded dashboard configuration"
        );

        Ok(Self { config })
    }

    /// Parses YAML content, attributing errors to `path`.
    fn parse(content: &str, path: &str) -> DashboardResult<DashboardConfig> {
        serde_yaml::from_str(content).map_err(|e| DashboardError::ConfigParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> DashboardConfig {
        self.config
    }
}
