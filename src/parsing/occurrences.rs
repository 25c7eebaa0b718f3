//! Parsing of the occurrence source.

use tracing::{debug, warn};

use crate::error::DashboardResult;
use crate::models::{Diagnostic, OccurrenceRecord, Parsed, SourceKind};

use super::tokenize_source;

/// Parses credit occurrences from the full text of the source.
///
/// Unlike the cost-center source, no byte-order mark is stripped. Lines with
/// fewer than twelve fields are skipped and reported. Lines whose status is
/// not one of the recognized [`OvertimeCategory`] labels are discarded
/// silently. When nothing survives, the result is empty and carries a
/// [`Diagnostic::NoCreditOccurrences`]; deciding whether that is fatal is left
/// to the caller.
///
/// [`OvertimeCategory`]: crate::models::OvertimeCategory
///
/// # Errors
///
/// Returns [`DashboardError::EmptyInput`] when the text holds no non-blank
/// lines.
///
/// [`DashboardError::EmptyInput`]: crate::error::DashboardError::EmptyInput
pub fn parse_occurrences(text: &str) -> DashboardResult<Parsed<OccurrenceRecord>> {
    let mut diagnostics = Vec::new();
    let lines = tokenize_source(text, SourceKind::Occurrences, &mut diagnostics)?;

    let records: Vec<OccurrenceRecord> = lines
        .iter()
        .filter_map(|line| {
            let record = OccurrenceRecord::from_fields(&line.fields);
            if record.is_none() {
                debug!(line_number = line.line_number, "Discarding non-credit occurrence");
            }
            record
        })
        .collect();

    debug!(
        parsed_lines = lines.len(),
        credit_records = records.len(),
        skipped = diagnostics.len(),
        "Parsed occurrence source"
    );

    if records.is_empty() {
        warn!(parsed_lines = lines.len(), "No credit occurrences found");
        diagnostics.push(Diagnostic::NoCreditOccurrences {
            parsed_lines: lines.len(),
        });
    }

    Ok(Parsed {
        records,
        diagnostics,
    })
}
