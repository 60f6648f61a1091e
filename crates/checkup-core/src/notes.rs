use checkup_model::{CellValue, NoteIndex, ProcessingOptions};
use tracing::debug;

/// Builds the employee id to note lookup from positional notes rows.
///
/// The first row is a header and is skipped. Rows missing either value are
/// ignored and a later row for the same employee id replaces an earlier one.
pub fn build_note_index(rows: &[Vec<CellValue>], options: &ProcessingOptions) -> NoteIndex {
    let mut index = NoteIndex::new();
    let mut skipped = 0usize;
    for row in rows.iter().skip(1) {
        let employee_id = cell_text(row, options.note_id_column);
        let note = cell_text(row, options.note_text_column);
        if !index.insert(&employee_id, &note) {
            skipped += 1;
        }
    }
    debug!(notes = index.len(), skipped, "built note index");
    index
}

fn cell_text(row: &[CellValue], position: usize) -> String {
    row.get(position).map(CellValue::to_text).unwrap_or_default()
}
