//! Delimited-text ingestion for the two dashboard sources.
//!
//! Both parsers share one shape: clean the text, split it into trimmed
//! non-blank lines, detect the delimiter from the header, drop the header and
//! map every remaining line to a record. Short lines are skipped with a
//! [`Diagnostic::MalformedLine`]; only a source with no lines at all is an
//! error.
//!
//! [`Diagnostic::MalformedLine`]: crate::models::Diagnostic::MalformedLine

mod cost_centers;
mod delimiter;
mod occurrences;
mod tokenizer;

pub use cost_centers::parse_cost_centers;
pub use delimiter::{Delimiter, detect_delimiter};
pub use occurrences::parse_occurrences;
pub use tokenizer::split_line;

use tracing::{debug, warn};

use crate::error::{DashboardError, DashboardResult};
use crate::models::{Diagnostic, SourceKind};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// A data line tokenized into fields, with its position in the source.
struct DataLine {
    line_number: usize,
    fields: Vec<String>,
}

/// Splits a source into tokenized data lines, header excluded.
///
/// Lines that are too short for `kind` are reported in `diagnostics` and left
/// out of the result.
fn tokenize_source(
    text: &str,
    kind: SourceKind,
    diagnostics: &mut Vec<Diagnostic>,
) -> DashboardResult<Vec<DataLine>> {
    let text = if kind.strips_bom() {
        text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text)
    } else {
        text
    };

    // Line numbers are physical, counted before blank lines are dropped.
    let lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !is_blank(line))
        .collect();

    if lines.is_empty() {
        return Err(DashboardError::EmptyInput { kind });
    }

    let delimiter = detect_delimiter(text);
    debug!(
        source = %kind,
        delimiter = %delimiter,
        data_lines = lines.len() - 1,
        "Tokenizing source"
    );

    let mut data_lines = Vec::with_capacity(lines.len() - 1);
    for &(line_number, line) in lines.iter().skip(1) {
        let fields = split_line(line, delimiter.as_char());

        if fields.len() < kind.min_fields() {
            warn!(
                source = %kind,
                line_number,
                field_count = fields.len(),
                line = %line,
                "Skipping malformed line"
            );
            diagnostics.push(Diagnostic::MalformedLine {
                source: kind,
                line_number,
                field_count: fields.len(),
                required: kind.min_fields(),
            });
            continue;
        }

        data_lines.push(DataLine {
            line_number,
            fields,
        });
    }

    Ok(data_lines)
}

/// A line is blank when nothing but whitespace and byte-order marks remain.
fn is_blank(line: &str) -> bool {
    line.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
        .is_empty()
}
