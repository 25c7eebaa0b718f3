//! Configuration loading and management for the dashboard.
//!
//! This module provides functionality to load the dashboard configuration
//! from a YAML file: where the two source files live and which filter
//! selection to start from.
//!
//! # Example
//!
//! ```no_run
//! use overtime_dashboard::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/dashboard.yaml").unwrap();
//! println!("Occurrences: {}", config.config().sources.occurrences.display());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DashboardConfig, SourcePaths};
