//! Tests for CSV sheet decoding.

use std::fs;

use checkup_ingest::{InputKind, detect_input_kind, read_csv_sheet, read_workbook};
use checkup_model::{CellValue, SheetSource};

#[test]
fn reads_csv_file_as_single_sheet() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("Status.csv");
    fs::write(&path, "\u{feff}No,HN,ID\n1,HN1, E1 \n,,\n2,HN2\n").expect("write csv");

    let sheet = read_csv_sheet(&path).expect("read csv");
    assert_eq!(sheet.name, "Status");
    assert_eq!(sheet.rows.len(), 4);
    assert_eq!(sheet.rows[0][0], CellValue::from("No"));
    assert_eq!(sheet.rows[1][2], CellValue::from("E1"));
    assert_eq!(sheet.rows[2], vec![CellValue::Empty; 3]);
    assert_eq!(sheet.rows[3].len(), 2);
}

#[test]
fn directory_yields_one_sheet_per_csv() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("status.csv"), "No,HN\n1,HN1\n").expect("write status");
    fs::write(dir.path().join("note.csv"), "No,HN,ID\n1,HN1,E1\n").expect("write note");
    fs::write(dir.path().join("readme.txt"), "ignored").expect("write txt");

    assert_eq!(
        detect_input_kind(dir.path()).expect("kind"),
        InputKind::CsvDirectory
    );
    let workbook = read_workbook(dir.path()).expect("read directory");
    assert_eq!(workbook.sheet_names(), vec!["note", "status"]);
    let rows = workbook.lettered_rows("status").expect("rows");
    assert_eq!(rows[1].text("B"), "HN1");
}

#[test]
fn rejects_unknown_inputs() {
    let dir = tempfile::tempdir().expect("temp dir");
    let text = dir.path().join("export.txt");
    fs::write(&text, "No").expect("write txt");
    assert!(read_workbook(&text).is_err());
    assert!(read_workbook(&dir.path().join("missing.xlsx")).is_err());

    let empty = tempfile::tempdir().expect("temp dir");
    assert!(read_workbook(empty.path()).is_err());
}
