//! Core data models for the overtime dashboard engine.
//!
//! This module contains the source records, joined records, chart-ready
//! aggregates and diagnostics used throughout the crate.

mod aggregates;
mod cost_center;
mod diagnostic;
mod joined;
mod occurrence;
mod source;

pub use aggregates::{CostCenterAggregate, DailyTypeAggregate, DurationBucket, DurationRange};
pub use cost_center::CostCenterRecord;
pub use diagnostic::{Diagnostic, Parsed};
pub use joined::JoinedRecord;
pub use occurrence::{CREDIT_50_LABEL, CREDIT_125_LABEL, OccurrenceRecord, OvertimeCategory};
pub use source::SourceKind;
