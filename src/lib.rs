//! Overtime dashboard engine.
//!
//! This crate ingests a cost-center assignment export and an overtime
//! occurrence export, joins them on the employee key and produces the
//! chart-ready summaries of an overtime dashboard: totals per cost center,
//! a duration histogram and daily hours per overtime category.

#![warn(missing_docs)]

pub mod config;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod parsing;
pub mod processing;
