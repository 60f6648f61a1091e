//! Tests for the station decision table.

use checkup_core::{STATION_CATALOG, StationOutcome, evaluate_markers, evaluate_station};
use checkup_model::{MatchType, RawRow};
use proptest::prelude::*;

fn station(key: &str) -> &'static checkup_model::StationDefinition {
    STATION_CATALOG.get(key).expect("station in catalog")
}

#[test]
fn single_station_markers() {
    assert_eq!(
        evaluate_markers(MatchType::Single, &["checked"]),
        StationOutcome::Checked
    );
    assert_eq!(
        evaluate_markers(MatchType::Single, &["unchecked"]),
        StationOutcome::Unchecked
    );
    assert_eq!(
        evaluate_markers(MatchType::Single, &[""]),
        StationOutcome::NotRequired
    );
    assert_eq!(
        evaluate_markers(MatchType::Single, &["-"]),
        StationOutcome::NotRequired
    );
    assert_eq!(
        evaluate_markers::<&str>(MatchType::Single, &[]),
        StationOutcome::NotRequired
    );
}

#[test]
fn combined_station_markers() {
    assert_eq!(
        evaluate_markers(MatchType::Combined, &["unchecked", "checked", ""]),
        StationOutcome::Checked
    );
    assert_eq!(
        evaluate_markers(MatchType::Combined, &["unchecked", "-", ""]),
        StationOutcome::Unchecked
    );
    assert_eq!(
        evaluate_markers(MatchType::Combined, &["-", "", "-"]),
        StationOutcome::NotRequired
    );
}

#[test]
fn combined_station_with_unrecognised_value_is_not_required() {
    assert_eq!(
        evaluate_markers(MatchType::Combined, &["unchecked", "maybe"]),
        StationOutcome::NotRequired
    );
    assert_eq!(
        evaluate_markers(MatchType::Combined, &["maybe", "checked"]),
        StationOutcome::Checked
    );
}

#[test]
fn evaluates_raw_cells_case_insensitively() {
    let row = RawRow::new()
        .with_cell("K", "  Checked ")
        .with_cell("L", "UNCHECKED")
        .with_cell("M", "-")
        .with_cell("Q", "maybe");
    assert_eq!(
        evaluate_station(station("foundDoctor"), &row),
        StationOutcome::Checked
    );
    assert_eq!(
        evaluate_station(station("bloodTest"), &row),
        StationOutcome::Unchecked
    );
    assert_eq!(
        evaluate_station(station("xray"), &row),
        StationOutcome::NotRequired
    );
    assert_eq!(
        evaluate_station(station("urineTest"), &row),
        StationOutcome::NotRequired
    );
}

#[test]
fn demographic_columns_are_never_required() {
    let row = RawRow::new().with_cell("A", "checked");
    assert_eq!(
        evaluate_station(station("no"), &row),
        StationOutcome::NotRequired
    );
}

#[test]
fn outcome_flags() {
    assert!(StationOutcome::Checked.is_required());
    assert!(StationOutcome::Checked.is_checked());
    assert!(StationOutcome::Unchecked.is_required());
    assert!(!StationOutcome::Unchecked.is_checked());
    assert!(!StationOutcome::NotRequired.is_required());
}

fn blank_marker() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("-".to_string()),
        Just(" - ".to_string()),
        Just("   ".to_string()),
    ]
}

proptest! {
    #[test]
    fn combined_station_without_signal_is_not_required(
        values in proptest::collection::vec(blank_marker(), 2..=3)
    ) {
        let mut row = RawRow::new();
        for (column, value) in ["L", "M", "N"].iter().zip(&values) {
            row.insert(column, value.as_str().into());
        }
        prop_assert_eq!(
            evaluate_station(station("bloodTest"), &row),
            StationOutcome::NotRequired
        );
    }

    #[test]
    fn any_checked_column_wins(position in 0usize..3, other in "[a-z-]{0,9}") {
        let mut values = vec![other.clone(), other.clone(), other];
        values[position] = "checked".to_string();
        prop_assert_eq!(
            evaluate_markers(MatchType::Combined, &values),
            StationOutcome::Checked
        );
    }
}
