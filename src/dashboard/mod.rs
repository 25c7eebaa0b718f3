//! Orchestration of the dashboard engine.
//!
//! This module ties ingestion and processing together: it reads both
//! sources, refuses to build a dashboard unless both produced records, keeps
//! the filter selection and computes [`DashboardSnapshot`]s.

mod snapshot;
mod sources;
mod state;

pub use snapshot::DashboardSnapshot;
pub use sources::{SourceTexts, read_sources};
pub use state::Dashboard;
