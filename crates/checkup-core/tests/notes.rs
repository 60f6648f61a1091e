//! Tests for the notes sheet index.

use checkup_core::build_note_index;
use checkup_model::{CellValue, ProcessingOptions};

fn note_row(employee_id: &str, note: &str) -> Vec<CellValue> {
    vec![
        CellValue::from("1"),
        CellValue::from("HN"),
        CellValue::from(employee_id),
        CellValue::from("Name"),
        CellValue::from("Dept"),
        CellValue::from(note),
    ]
}

#[test]
fn skips_header_row() {
    let rows = vec![note_row("id", "note"), note_row("E1", "follow-up")];
    let index = build_note_index(&rows, &ProcessingOptions::default());
    assert_eq!(index.len(), 1);
    assert_eq!(index.get("id"), None);
    assert_eq!(index.get("E1"), Some("follow-up"));
}

#[test]
fn last_duplicate_wins() {
    let rows = vec![
        note_row("id", "note"),
        note_row("E1", "first"),
        note_row("E2", "other"),
        note_row(" E1 ", " second "),
    ];
    let index = build_note_index(&rows, &ProcessingOptions::default());
    assert_eq!(index.len(), 2);
    assert_eq!(index.get("E1"), Some("second"));
}

#[test]
fn ignores_incomplete_rows() {
    let rows = vec![
        note_row("id", "note"),
        note_row("", "orphan note"),
        note_row("E3", "   "),
        vec![CellValue::from("short row")],
        Vec::new(),
    ];
    let index = build_note_index(&rows, &ProcessingOptions::default());
    assert!(index.is_empty());
}

#[test]
fn numeric_employee_ids_are_matched_as_text() {
    let mut row = note_row("", "vaccinated");
    row[2] = CellValue::Number(1042.0);
    let rows = vec![note_row("id", "note"), row];
    let index = build_note_index(&rows, &ProcessingOptions::default());
    assert_eq!(index.get("1042"), Some("vaccinated"));
}
