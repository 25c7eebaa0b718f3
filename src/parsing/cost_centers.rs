//! Parsing of the cost-center source.

use tracing::debug;

use crate::error::DashboardResult;
use crate::models::{CostCenterRecord, Parsed, SourceKind};

use super::tokenize_source;

/// Parses cost-center assignments from the full text of the source.
///
/// A leading byte-order mark is stripped. Lines with fewer than four fields
/// are skipped and reported as diagnostics.
///
/// # Errors
///
/// Returns [`DashboardError::EmptyInput`] when the text holds no non-blank
/// lines.
///
/// [`DashboardError::EmptyInput`]: crate::error::DashboardError::EmptyInput
///
/// # Example
///
/// ```
/// use overtime_dashboard::parsing::parse_cost_centers;
///
/// let text = "\u{feff}cadastro;nome;centro;descricao\n1001;Ana;CC-10;Assembly\n1002;Bruno\n";
/// let parsed = parse_cost_centers(text)?;
///
/// assert_eq!(parsed.records.len(), 1);
/// assert_eq!(parsed.records[0].cost_center, "CC-10");
/// assert_eq!(parsed.diagnostics.len(), 1);
/// # Ok::<(), overtime_dashboard::error::DashboardError>(())
/// ```
pub fn parse_cost_centers(text: &str) -> DashboardResult<Parsed<CostCenterRecord>> {
    let mut diagnostics = Vec::new();
    let lines = tokenize_source(text, SourceKind::CostCenters, &mut diagnostics)?;

    let records: Vec<CostCenterRecord> = lines
        .iter()
        .filter_map(|line| CostCenterRecord::from_fields(&line.fields))
        .collect();

    debug!(
        records = records.len(),
        skipped = diagnostics.len(),
        "Parsed cost-center source"
    );

    Ok(Parsed {
        records,
        diagnostics,
    })
}
