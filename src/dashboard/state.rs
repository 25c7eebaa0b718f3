//! Dashboard state: ingested records plus the current filter selection.

use std::path::Path;
use std::time::Instant;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::DashboardConfig;
use crate::error::{DashboardError, DashboardResult};
use crate::models::{
    CostCenterRecord, Diagnostic, JoinedRecord, OccurrenceRecord, OvertimeCategory,
};
use crate::parsing::{parse_cost_centers, parse_occurrences};
use crate::processing::{
    FilterCriteria, aggregate_by_cost_center, aggregate_by_date_and_type,
    apply_filters, distinct_cost_centers, distinct_dates, group_by_duration, join_records,
    normalize_selection,
};

use super::snapshot::DashboardSnapshot;
use super::sources::read_sources;

/// Ingested source data and the active filter selection.
///
/// A `Dashboard` only exists once both sources have parsed successfully and
/// each produced at least one record, so a failure in either file never
/// yields a partial dashboard. Aggregates are recomputed from the joined
/// records on every [`Dashboard::snapshot`] call.
///
/// # Example
///
/// ```
/// use overtime_dashboard::dashboard::Dashboard;
///
/// let cost_centers = "cadastro,nome,centro,descricao\n1001,Ana,CC-10,Assembly\n";
/// let occurrences = concat!(
///     "a,b,c,d,e,f,g,h,i,j,k,l\n",
///     "R-1,1001,Ana,2024-03-04,E,H,D,08:00:00,18:00:00,09:00:00,Crédito BH 125%,01:30:00\n",
/// );
///
/// let dashboard = Dashboard::from_texts(cost_centers, occurrences)?;
/// let snapshot = dashboard.snapshot();
///
/// assert_eq!(snapshot.by_cost_center[0].cost_center, "CC-10");
/// assert_eq!(snapshot.total_records, 1);
/// # Ok::<(), overtime_dashboard::error::DashboardError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Dashboard {
    cost_centers: Vec<CostCenterRecord>,
    occurrences: Vec<OccurrenceRecord>,
    joined: Vec<JoinedRecord>,
    diagnostics: Vec<Diagnostic>,
    filters: FilterCriteria,
}

impl Dashboard {
    /// Builds a dashboard from the already-read text of both sources.
    ///
    /// # Errors
    ///
    /// - [`DashboardError::EmptyInput`] if either source has no lines
    /// - [`DashboardError::NoCostCenterRecords`] if no cost-center line parsed
    /// - [`DashboardError::NoCreditOccurrences`] if no credit occurrence parsed
    pub fn from_texts(cost_center_text: &str, occurrence_text: &str) -> DashboardResult<Self> {
        let load_id = Uuid::new_v4();

        let cost_centers = parse_cost_centers(cost_center_text)?;
        let occurrences = parse_occurrences(occurrence_text)?;

        if cost_centers.records.is_empty() {
            warn!(load_id = %load_id, "Cost-center source produced no records");
            return Err(DashboardError::NoCostCenterRecords);
        }
        if occurrences.records.is_empty() {
            warn!(load_id = %load_id, "Occurrence source produced no credit occurrences");
            return Err(DashboardError::NoCreditOccurrences);
        }

        let joined = join_records(&cost_centers.records, &occurrences.records);

        let mut diagnostics = cost_centers.diagnostics;
        diagnostics.extend(occurrences.diagnostics);
        diagnostics.extend(joined.diagnostics);

        info!(
            load_id = %load_id,
            cost_centers = cost_centers.records.len(),
            occurrences = occurrences.records.len(),
            joined = joined.records.len(),
            diagnostics = diagnostics.len(),
            "Dashboard sources loaded"
        );

        Ok(Self {
            cost_centers: cost_centers.records,
            occurrences: occurrences.records,
            joined: joined.records,
            diagnostics,
            filters: FilterCriteria::default(),
        })
    }

    /// Reads both source files concurrently, then builds the dashboard.
    ///
    /// # Errors
    ///
    /// Any error from [`read_sources`] or [`Dashboard::from_texts`].
    pub async fn load(
        cost_centers: impl AsRef<Path>,
        occurrences: impl AsRef<Path>,
    ) -> DashboardResult<Self> {
        let texts = read_sources(cost_centers, occurrences).await?;
        Self::from_texts(&texts.cost_centers, &texts.occurrences)
    }

    /// Loads the sources named by a configuration and applies its filters.
    pub async fn from_config(config: &DashboardConfig) -> DashboardResult<Self> {
        let sources = &config.sources;
        let mut dashboard = Self::load(&sources.cost_centers, &sources.occurrences).await?;
        dashboard.set_filters(config.filters.clone());
        Ok(dashboard)
    }

    /// Replaces both sources and resets the filter selection.
    ///
    /// On error the dashboard is left unchanged.
    pub fn replace_sources(
        &mut self,
        cost_center_text: &str,
        occurrence_text: &str,
    ) -> DashboardResult<()> {
        *self = Self::from_texts(cost_center_text, occurrence_text)?;
        Ok(())
    }

    /// Returns the parsed cost-center records.
    pub fn cost_center_records(&self) -> &[CostCenterRecord] {
        &self.cost_centers
    }

    /// Returns the parsed credit occurrences.
    pub fn occurrence_records(&self) -> &[OccurrenceRecord] {
        &self.occurrences
    }

    /// Returns every joined record, ignoring the filter selection.
    pub fn joined_records(&self) -> &[JoinedRecord] {
        &self.joined
    }

    /// Returns the diagnostics raised while ingesting the sources.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns how many occurrences were dropped for lack of a cost center.
    pub fn unresolved_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d, Diagnostic::UnresolvedJoinKey { .. }))
            .count()
    }

    /// Returns the active filter selection.
    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    /// Replaces the whole filter selection.
    pub fn set_filters(&mut self, filters: FilterCriteria) {
        self.filters = FilterCriteria {
            cost_center: selection(filters.cost_center.as_deref()),
            overtime_type: selection(filters.overtime_type.as_deref()),
            start_date: selection(filters.start_date.as_deref()),
            end_date: selection(filters.end_date.as_deref()),
        };
    }

    /// Selects a cost center; `None` or `"all"` clears the selection.
    pub fn set_cost_center(&mut self, cost_center: Option<&str>) {
        self.filters.cost_center = selection(cost_center);
    }

    /// Selects an overtime type label; `None` or `"all"` clears the selection.
    pub fn set_overtime_type(&mut self, overtime_type: Option<&str>) {
        self.filters.overtime_type = selection(overtime_type);
    }

    /// Sets the inclusive lower date bound.
    pub fn set_start_date(&mut self, date: Option<&str>) {
        self.filters.start_date = selection(date);
    }

    /// Sets the inclusive upper date bound.
    pub fn set_end_date(&mut self, date: Option<&str>) {
        self.filters.end_date = selection(date);
    }

    /// Clears every filter.
    pub fn clear_filters(&mut self) {
        self.filters = FilterCriteria::default();
    }

    /// Returns true if any filter is active.
    pub fn has_active_filters(&self) -> bool {
        self.filters.is_active()
    }

    /// Returns the cost-center options, over all joined records.
    pub fn cost_centers(&self) -> Vec<String> {
        distinct_cost_centers(&self.joined)
    }

    /// Returns the date options, over all joined records.
    pub fn available_dates(&self) -> Vec<String> {
        distinct_dates(&self.joined)
    }

    /// Returns the overtime-type options.
    pub fn overtime_types(&self) -> Vec<String> {
        OvertimeCategory::ALL
            .iter()
            .map(|c| c.label().to_string())
            .collect()
    }

    /// Returns the joined records that pass the filter selection.
    pub fn filtered_records(&self) -> Vec<JoinedRecord> {
        apply_filters(&self.joined, &self.filters)
    }

    /// Computes every chart-ready view for the current filter selection.
    pub fn snapshot(&self) -> DashboardSnapshot {
        let start_time = Instant::now();
        let filtered = self.filtered_records();

        let by_cost_center = aggregate_by_cost_center(&filtered);
        let total_records = by_cost_center.iter().map(|a| a.occurrence_count).sum();

        DashboardSnapshot {
            snapshot_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            filters: self.filters.clone(),
            cost_centers: self.cost_centers(),
            available_dates: self.available_dates(),
            overtime_types: self.overtime_types(),
            by_cost_center,
            duration_buckets: group_by_duration(&filtered),
            daily_types: aggregate_by_date_and_type(&filtered),
            total_records,
            diagnostics: self.diagnostics.clone(),
            duration_us: start_time.elapsed().as_micros() as u64,
        }
    }
}

fn selection(value: Option<&str>) -> Option<String> {
    normalize_selection(value).map(str::to_string)
}
