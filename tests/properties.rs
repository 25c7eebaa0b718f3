//! Property tests for the filter and aggregation invariants.

use std::collections::HashSet;

use proptest::prelude::*;
use rust_decimal::Decimal;

use overtime_dashboard::models::{
    CostCenterRecord, JoinedRecord, OccurrenceRecord, OvertimeCategory,
};
use overtime_dashboard::processing::{
    FilterCriteria, aggregate_by_cost_center, aggregate_by_date_and_type, apply_filters,
    group_by_duration, join_records, parse_time_to_hours,
};

const COST_CENTERS: [&str; 3] = ["CC-A", "CC-B", "CC-C"];

fn occurrence(
    index: usize,
    employee_key: &str,
    date: String,
    status: OvertimeCategory,
    hours: String,
) -> OccurrenceRecord {
    OccurrenceRecord {
        record_id: format!("R-{index}"),
        employee_key: employee_key.to_string(),
        name: "Employee".to_string(),
        date,
        shift: "E01".to_string(),
        schedule_code: "H100".to_string(),
        schedule_description: "Comercial".to_string(),
        start: "08:00:00".to_string(),
        end: "18:00:00".to_string(),
        total_hours: "09:00:00".to_string(),
        status,
        occurrence_hours: hours,
    }
}

fn cost_center(key: &str, center: &str) -> CostCenterRecord {
    CostCenterRecord {
        employee_key: key.to_string(),
        name: "Employee".to_string(),
        cost_center: center.to_string(),
        cost_center_description: String::new(),
    }
}

fn category() -> impl Strategy<Value = OvertimeCategory> {
    prop::sample::select(OvertimeCategory::ALL.to_vec())
}

fn duration() -> impl Strategy<Value = String> {
    (0u32..5, 0u32..60, 0u32..60).prop_map(|(h, m, s)| format!("{h:02}:{m:02}:{s:02}"))
}

fn date() -> impl Strategy<Value = String> {
    (1u32..=9).prop_map(|day| format!("2024-03-{day:02}"))
}

fn joined_records() -> impl Strategy<Value = Vec<JoinedRecord>> {
    prop::collection::vec(
        (prop::sample::select(COST_CENTERS.to_vec()), category(), date(), duration()),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(index, (center, status, date, hours))| {
                JoinedRecord::new(
                    occurrence(index, "1", date, status, hours),
                    &cost_center("1", center),
                )
            })
            .collect()
    })
}

fn selection(values: Vec<&'static str>) -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::sample::select(values).prop_map(str::to_string))
}

fn criteria() -> impl Strategy<Value = FilterCriteria> {
    (
        selection(vec!["CC-A", "CC-B", "CC-C", "all"]),
        selection(vec!["Crédito BH 125%", "Crédito BH 50%", "all"]),
        prop::option::of(date()),
        prop::option::of(date()),
    )
        .prop_map(|(cost_center, overtime_type, start_date, end_date)| FilterCriteria {
            cost_center,
            overtime_type,
            start_date,
            end_date,
        })
}

fn ids(records: &[JoinedRecord]) -> HashSet<String> {
    records
        .iter()
        .map(|r| r.occurrence.record_id.clone())
        .collect()
}

proptest! {
    #[test]
    fn test_well_formed_durations_convert_exactly(h in 0u32..100, m in 0u32..60, s in 0u32..60) {
        let hours = parse_time_to_hours(&format!("{h:02}:{m:02}:{s:02}"));
        let expected = Decimal::from(h)
            + Decimal::from(m) / Decimal::from(60)
            + Decimal::from(s) / Decimal::from(3600);
        prop_assert!((hours - expected).abs() < Decimal::new(1, 9));
        prop_assert!(hours >= Decimal::ZERO);
    }

    #[test]
    fn test_conversion_never_negative(input in ".{0,12}") {
        prop_assert!(parse_time_to_hours(&input) >= Decimal::ZERO);
    }

    #[test]
    fn test_cost_center_filter_only_keeps_that_center(
        records in joined_records(),
        center in prop::sample::select(COST_CENTERS.to_vec()),
    ) {
        let criteria = FilterCriteria {
            cost_center: Some(center.to_string()),
            ..FilterCriteria::default()
        };
        let filtered = apply_filters(&records, &criteria);
        prop_assert!(filtered.iter().all(|r| r.cost_center == center));
    }

    #[test]
    fn test_combined_filter_is_intersection_of_single_filters(
        records in joined_records(),
        criteria in criteria(),
    ) {
        let combined = ids(&apply_filters(&records, &criteria));

        let singles = [
            FilterCriteria { cost_center: criteria.cost_center.clone(), ..FilterCriteria::default() },
            FilterCriteria { overtime_type: criteria.overtime_type.clone(), ..FilterCriteria::default() },
            FilterCriteria {
                start_date: criteria.start_date.clone(),
                end_date: criteria.end_date.clone(),
                ..FilterCriteria::default()
            },
        ];
        let intersection = singles
            .iter()
            .map(|single| ids(&apply_filters(&records, single)))
            .reduce(|acc, next| acc.intersection(&next).cloned().collect())
            .unwrap_or_default();

        prop_assert_eq!(combined, intersection);
    }

    #[test]
    fn test_filter_preserves_input_order(records in joined_records(), criteria in criteria()) {
        let filtered = apply_filters(&records, &criteria);
        let positions: Vec<usize> = filtered
            .iter()
            .map(|f| records.iter().position(|r| r == f).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_cost_center_totals_conserve_count_and_sort_descending(records in joined_records()) {
        let totals = aggregate_by_cost_center(&records);

        let count: usize = totals.iter().map(|t| t.occurrence_count).sum();
        prop_assert_eq!(count, records.len());
        prop_assert!(totals.windows(2).all(|w| w[0].total_hours >= w[1].total_hours));
        prop_assert!(totals.iter().all(|t| t.total_hours >= Decimal::ZERO));
    }

    #[test]
    fn test_duration_buckets_partition_records(records in joined_records()) {
        let buckets = group_by_duration(&records);

        prop_assert_eq!(buckets.len(), 4);
        let count: usize = buckets.iter().map(|b| b.occurrences).sum();
        prop_assert_eq!(count, records.len());
        prop_assert!(buckets.iter().all(|b| b.size == b.occurrences));
    }

    #[test]
    fn test_daily_dates_strictly_increase(records in joined_records()) {
        let daily = aggregate_by_date_and_type(&records);
        prop_assert!(daily.windows(2).all(|w| w[0].date < w[1].date));

        for day in &daily {
            let has_credit_50 = records
                .iter()
                .any(|r| r.date() == day.date && r.status() == OvertimeCategory::Credit50);
            if !has_credit_50 {
                prop_assert_eq!(day.credit_50_hours, Decimal::ZERO);
            }
        }
    }

    #[test]
    fn test_join_never_grows(
        keys in prop::collection::vec(0u8..6, 0..30),
        known in prop::collection::vec(0u8..6, 0..6),
    ) {
        let cost_centers: Vec<CostCenterRecord> = known
            .iter()
            .map(|k| cost_center(&k.to_string(), "CC-A"))
            .collect();
        let occurrences: Vec<OccurrenceRecord> = keys
            .iter()
            .enumerate()
            .map(|(i, k)| {
                occurrence(
                    i,
                    &k.to_string(),
                    "2024-03-01".to_string(),
                    OvertimeCategory::Credit125,
                    "01:00:00".to_string(),
                )
            })
            .collect();

        let joined = join_records(&cost_centers, &occurrences);
        let resolvable = keys.iter().filter(|k| known.contains(*k)).count();

        prop_assert!(joined.records.len() <= occurrences.len());
        prop_assert_eq!(joined.records.len(), resolvable);
        prop_assert_eq!(joined.diagnostics.len(), occurrences.len() - resolvable);
    }
}
