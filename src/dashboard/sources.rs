//! Asynchronous reading of the two source files.

use std::path::Path;

use tracing::debug;

use crate::error::{DashboardError, DashboardResult};

/// The full text of both sources, read before any parsing starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTexts {
    /// Text of the cost-center source.
    pub cost_centers: String,
    /// Text of the occurrence source.
    pub occurrences: String,
}

/// Reads both source files concurrently.
///
/// Parsing only starts once both reads have completed; if either read fails
/// the other result is discarded.
///
/// # Errors
///
/// Returns [`DashboardError::SourceUnreadable`] naming the first file that
/// could not be read.
pub async fn read_sources(
    cost_centers: impl AsRef<Path>,
    occurrences: impl AsRef<Path>,
) -> DashboardResult<SourceTexts> {
    let (cost_centers, occurrences) = tokio::try_join!(
        read_source(cost_centers.as_ref()),
        read_source(occurrences.as_ref()),
    )?;

    Ok(SourceTexts {
        cost_centers,
        occurrences,
    })
}

async fn read_source(path: &Path) -> DashboardResult<String> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| DashboardError::SourceUnreadable {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    debug!(path = %path.display(), bytes = text.len(), "Read source file");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reads_both_sample_sources() {
        let texts = read_sources(
            "./config/data/cost_centers.csv",
            "./config/data/occurrences.csv",
        )
        .await
        .unwrap();

        assert!(texts.cost_centers.starts_with('\u{feff}'));
        assert!(texts.occurrences.starts_with("id_registro;"));
    }

    #[tokio::test]
    async fn test_missing_file_is_source_unreadable() {
        let result = read_sources(
            "./config/data/cost_centers.csv",
            "/nonexistent/occurrences.csv",
        )
        .await;

        match result {
            Err(DashboardError::SourceUnreadable { path, .. }) => {
                assert_eq!(path, "/nonexistent/occurrences.csv");
            }
            other => panic!("Expected SourceUnreadable, got {:?}", other),
        }
    }
}
