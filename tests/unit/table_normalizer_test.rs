//! Column policy of the report table

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

use ocs_report::core::{partition_weeks, WeekInterval};
use ocs_report::gateways::OcsId;
use ocs_report::reports::models::{columns, ReportRow, RowRecord, WeeklyFigure};
use ocs_report::reports::services::normalize;
use ocs_report::subscribers::models::Amount;
use ocs_report::subscribers::PrepaidPackage;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn weeks() -> Vec<WeekInterval> {
    partition_weeks(date(2025, 6, 1), date(2025, 6, 10))
}

fn row(subscriber_id: i64, package: Option<PrepaidPackage>, figures: &[WeeklyFigure]) -> ReportRow {
    ReportRow {
        subscriber_id: Some(OcsId::from(subscriber_id)),
        iccid: Some(format!("8944{}", subscriber_id)),
        last_usage_date: None,
        package,
        weekly: weeks().into_iter().zip(figures.iter().copied()).collect(),
    }
}

fn available(used: f64) -> WeeklyFigure {
    WeeklyFigure::Available {
        used_bytes: used,
        reseller_cost: dec!(0.10),
        subscriber_cost: dec!(0.25),
    }
}

#[test]
fn test_full_rows_produce_base_then_weekly_columns() {
    let rows = vec![
        row(1, None, &[available(10.0), available(20.0)]).to_record(),
        row(2, None, &[available(0.0), WeeklyFigure::Unavailable]).to_record(),
    ];

    let table = normalize(rows);

    assert_eq!(table.columns.len(), 18);
    assert_eq!(&table.columns[..12], &columns::BASE[..]);
    assert_eq!(
        &table.columns[12..],
        &[
            "resellerCost_2025-06-01_to_2025-06-07",
            "resellerCost_2025-06-08_to_2025-06-10",
            "subscriberCost_2025-06-01_to_2025-06-07",
            "subscriberCost_2025-06-08_to_2025-06-10",
            "usedData_2025-06-01_to_2025-06-07",
            "usedData_2025-06-08_to_2025-06-10",
        ]
    );
}

#[test]
fn test_unavailable_week_stays_distinct_from_zero() {
    let table = normalize(vec![
        row(2, None, &[available(0.0), WeeklyFigure::Unavailable]).to_record(),
    ]);

    assert_eq!(table.cell(0, "usedData_2025-06-01_to_2025-06-07"), Some(&json!(0)));
    assert_eq!(table.cell(0, "usedData_2025-06-08_to_2025-06-10"), Some(&json!("")));
    assert_eq!(table.cell(0, "resellerCost_2025-06-08_to_2025-06-10"), Some(&json!("")));
    assert_eq!(table.cell(0, "subscriberCost_2025-06-08_to_2025-06-10"), Some(&json!("")));
}

#[test]
fn test_package_less_row_has_empty_package_fields() {
    let table = normalize(vec![row(7, None, &[available(1.0)]).to_record()]);

    for column in [
        columns::PACKAGE_ID,
        columns::TEMPLATE_ID,
        columns::TEMPLATE_NAME,
        columns::SUBSCRIBER_COST,
        columns::RESELLER_COST,
        columns::USED_DATA_BYTE,
        columns::PACKAGE_DATA_BYTE,
        columns::ACTIVATION_DATE,
        columns::EXPIRY_DATE,
    ] {
        assert_eq!(table.cell(0, column), Some(&json!("")), "{}", column);
    }
    assert_eq!(table.cell(0, columns::SUBSCRIBER_ID), Some(&json!(7)));
}

#[test]
fn test_package_fields_are_rendered() {
    let package = PrepaidPackage {
        package_id: Some(OcsId::from(9001)),
        template_id: Some(OcsId::from(77)),
        template_name: Some("EU 5GB".to_string()),
        subscriber_cost: Some(Amount::Number(dec!(4.50))),
        reseller_cost: Some(Amount::Number(dec!(2))),
        used_bytes: Some(Amount::Number(dec!(1024))),
        capacity_bytes: Some(Amount::Number(dec!(5368709120))),
        activation_date: Some("2025-05-30".to_string()),
        expiry_date: None,
    };
    let table = normalize(vec![row(1, Some(package), &[]).to_record()]);

    assert_eq!(table.cell(0, columns::PACKAGE_ID), Some(&json!(9001)));
    assert_eq!(table.cell(0, columns::TEMPLATE_NAME), Some(&json!("EU 5GB")));
    assert_eq!(table.cell(0, columns::SUBSCRIBER_COST), Some(&json!(4.5)));
    assert_eq!(table.cell(0, columns::RESELLER_COST), Some(&json!(2)));
    assert_eq!(table.cell(0, columns::PACKAGE_DATA_BYTE), Some(&json!(5_368_709_120i64)));
    assert_eq!(table.cell(0, columns::EXPIRY_DATE), Some(&json!("")));
}

#[test]
fn test_heterogeneous_rows_union_keys_in_policy_order() {
    let mut first = row(1, None, &[available(1.0)]).to_record();
    first.insert("note".to_string(), json!("first"));
    let mut second = RowRecord::new();
    second.insert("usedData_2025-05-25_to_2025-05-31".to_string(), json!(3));
    second.insert("region".to_string(), json!("EU"));
    second.insert("note".to_string(), json!("second"));

    let table = normalize(vec![first, second]);

    let tail: Vec<&str> = table.columns[12..].iter().map(String::as_str).collect();
    assert_eq!(
        tail,
        vec![
            "note",
            "region",
            "resellerCost_2025-06-01_to_2025-06-07",
            "subscriberCost_2025-06-01_to_2025-06-07",
            "usedData_2025-05-25_to_2025-05-31",
            "usedData_2025-06-01_to_2025-06-07",
        ]
    );
    assert_eq!(table.cell(1, columns::SUBSCRIBER_ID), None);
}

#[test]
fn test_rows_are_kept_in_input_order() {
    let rows: Vec<RowRecord> = (1..=5).rev().map(|id| row(id, None, &[]).to_record()).collect();
    let table = normalize(rows);

    let ids: Vec<&Value> = (0..table.len())
        .filter_map(|i| table.cell(i, columns::SUBSCRIBER_ID))
        .collect();
    assert_eq!(ids, vec![&json!(5), &json!(4), &json!(3), &json!(2), &json!(1)]);
}

fn arbitrary_key() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(columns::BASE.to_vec()).prop_map(str::to_string),
        "[a-z]{1,6}",
        (prop::sample::select(columns::WEEKLY_PREFIXES.to_vec()), 1u32..28)
            .prop_map(|(prefix, day)| format!("{}2025-06-{:02}_to_2025-06-28", prefix, day)),
    ]
}

fn arbitrary_rows() -> impl Strategy<Value = Vec<RowRecord>> {
    prop::collection::vec(prop::collection::vec(arbitrary_key(), 0..10), 0..8).prop_map(|rows| {
        rows.into_iter()
            .map(|keys| keys.into_iter().map(|key| (key, json!(1))).collect())
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_columns_are_base_plus_exact_union_without_duplicates(rows in arbitrary_rows()) {
        let union: HashSet<String> = rows.iter().flat_map(|row| row.keys().cloned()).collect();
        let table = normalize(rows);

        let distinct: HashSet<&String> = table.columns.iter().collect();
        prop_assert_eq!(distinct.len(), table.columns.len());
        prop_assert_eq!(&table.columns[..12], &columns::BASE[..]);

        let expected: HashSet<String> = union
            .into_iter()
            .chain(columns::BASE.iter().map(|c| c.to_string()))
            .collect();
        let actual: HashSet<String> = table.columns.iter().cloned().collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_weekly_columns_are_sorted_and_last(rows in arbitrary_rows()) {
        let table = normalize(rows);
        let first_weekly = table
            .columns
            .iter()
            .position(|c| columns::is_weekly(c))
            .unwrap_or(table.columns.len());

        let weekly = &table.columns[first_weekly..];
        prop_assert!(weekly.iter().all(|c| columns::is_weekly(c)));
        prop_assert!(weekly.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

#[test]
fn test_weekly_map_orders_chronologically() {
    let mut weekly = BTreeMap::new();
    for week in weeks().into_iter().rev() {
        weekly.insert(week, available(1.0));
    }
    let record = ReportRow {
        subscriber_id: None,
        iccid: None,
        last_usage_date: None,
        package: None,
        weekly,
    }
    .to_record();

    let keys: Vec<&String> = record.keys().skip(12).collect();
    assert_eq!(keys[0], "usedData_2025-06-01_to_2025-06-07");
    assert_eq!(keys[3], "usedData_2025-06-08_to_2025-06-10");
    assert_eq!(record[columns::SUBSCRIBER_ID], json!(""));
}
