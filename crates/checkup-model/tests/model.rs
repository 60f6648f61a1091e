//! Tests for checkup-model types.

use std::collections::BTreeMap;

use checkup_model::{
    MatchType, PersonRecord, PersonStatus, ProcessingOptions, ProcessingResult,
    StationDefinition,
};

static URINE: StationDefinition =
    StationDefinition::combined("urineTest", "เก็บปัสสาวะ (Urine)", &["O", "P"]);

fn sample_person() -> PersonRecord {
    let mut stations = BTreeMap::new();
    stations.insert("urineTest".to_string(), false);
    PersonRecord {
        sequence: "1".to_string(),
        health_record_number: "HN001".to_string(),
        employee_id: "E1".to_string(),
        name: "Somchai".to_string(),
        date: "15/01/2024".to_string(),
        time: "08:30".to_string(),
        department: "QA".to_string(),
        position: "Inspector".to_string(),
        affiliation: "ACME".to_string(),
        note: String::new(),
        stations,
        required_stations: vec!["urineTest".to_string()],
        uncompleted_stations: vec!["เก็บปัสสาวะ (Urine)".to_string()],
        is_registered: true,
        status: PersonStatus::Incomplete,
    }
}

#[test]
fn status_serializes_kebab_case() {
    let statuses = vec![
        PersonStatus::NotRegistered,
        PersonStatus::Incomplete,
        PersonStatus::Complete,
    ];
    insta::assert_json_snapshot!(statuses, @r#"
    [
      "not-registered",
      "incomplete",
      "complete"
    ]
    "#);
}

#[test]
fn status_labels_are_display_sentinels() {
    assert_eq!(PersonStatus::NotRegistered.label(), "ยังไม่ลงทะเบียน");
    assert_eq!(PersonStatus::Incomplete.label(), "ตรวจไม่ครบ");
    assert_eq!(PersonStatus::Complete.label(), "ตรวจครบ");
    assert_eq!(PersonStatus::Complete.to_string(), "complete");
}

#[test]
fn person_record_uses_export_keys() {
    let value = serde_json::to_value(sample_person()).expect("serialize person");
    assert_eq!(value["no"], "1");
    assert_eq!(value["hn"], "HN001");
    assert_eq!(value["id"], "E1");
    assert_eq!(value["isRegistered"], true);
    assert_eq!(value["status"], "incomplete");
    assert_eq!(value["requiredStations"][0], "urineTest");
    assert_eq!(value["uncompletedStations"][0], "เก็บปัสสาวะ (Urine)");
    assert_eq!(value["stations"]["urineTest"], false);
}

#[test]
fn person_record_round_trips() {
    let person = sample_person();
    let json = serde_json::to_string(&person).expect("serialize person");
    let round: PersonRecord = serde_json::from_str(&json).expect("deserialize person");
    assert_eq!(round, person);
    assert!(round.is_required("urineTest"));
    assert!(!round.is_checked("urineTest"));
    assert_eq!(round.completed_count(), 0);
}

#[test]
fn result_serializes_persons_and_active_stations() {
    let result = ProcessingResult {
        persons: vec![sample_person()],
        active_stations: vec![&URINE],
    };
    let value = serde_json::to_value(&result).expect("serialize result");
    assert_eq!(value["persons"].as_array().map(Vec::len), Some(1));
    let station = &value["activeStations"][0];
    assert_eq!(station["key"], "urineTest");
    assert_eq!(station["name"], "เก็บปัสสาวะ (Urine)");
    assert_eq!(station["cols"], serde_json::json!(["O", "P"]));
    assert_eq!(station["type"], "combined");
    assert_eq!(result.count_by_status(PersonStatus::Incomplete), 1);
}

#[test]
fn demographic_definition_omits_name_and_type() {
    let field = StationDefinition::field("hn", &["B"]);
    let value = serde_json::to_value(field).expect("serialize field");
    assert!(value.get("name").is_none());
    assert!(value.get("type").is_none());
    assert!(!field.is_checkup());
    assert_eq!(field.label(), "hn");
    assert_eq!(URINE.match_type, Some(MatchType::Combined));
}

#[test]
fn options_default_to_export_identifiers() {
    let options = ProcessingOptions::default();
    assert_eq!(options.primary_sheet, "status");
    assert_eq!(options.notes_sheet, "note");
    assert_eq!(options.header_label, "no");
    assert_eq!(options.note_id_column, 2);
    assert_eq!(options.note_text_column, 5);
}

#[test]
fn options_fill_missing_fields_from_defaults() {
    let options: ProcessingOptions =
        serde_json::from_str(r#"{"primary_sheet": "Results"}"#).expect("parse options");
    assert_eq!(options.primary_sheet, "Results");
    assert_eq!(options.notes_sheet, "note");
    assert!(serde_json::from_str::<ProcessingOptions>(r#"{"unknown": 1}"#).is_err());
}
