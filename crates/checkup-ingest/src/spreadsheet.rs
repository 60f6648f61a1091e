//! Spreadsheet workbooks decoded with calamine.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use checkup_model::{CellValue, Sheet, Workbook};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Converts a calamine cell into a [`CellValue`].
///
/// Date cells become native date-times; error cells keep their display text.
pub fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(value) => CellValue::Text(value.clone()),
        Data::Float(value) => CellValue::Number(*value),
        Data::Int(value) => CellValue::Number(*value as f64),
        Data::Bool(value) => CellValue::Bool(*value),
        Data::DateTime(value) => match value.as_datetime() {
            Some(datetime) => CellValue::DateTime(datetime),
            None => CellValue::Number(value.as_f64()),
        },
        Data::DateTimeIso(value) | Data::DurationIso(value) => CellValue::Text(value.clone()),
        Data::Error(error) => CellValue::Text(error.to_string()),
    }
}

/// Reads every worksheet of a spreadsheet file.
///
/// Rows start at the sheet's first used row. Cells are placed at their
/// absolute column, so column `A` is always the first entry of a row.
pub fn read_spreadsheet(path: &Path) -> Result<Workbook> {
    let workbook_error = |message: String| IngestError::Workbook {
        path: path.to_path_buf(),
        message,
    };
    let mut source = open_workbook_auto(path).map_err(|e| workbook_error(e.to_string()))?;
    let sheet_names = source.sheet_names().to_owned();

    let mut workbook = Workbook::new();
    for sheet_name in sheet_names {
        let range = source
            .worksheet_range(&sheet_name)
            .map_err(|e| workbook_error(format!("sheet {sheet_name}: {e}")))?;
        let col_offset = range.start().map(|(_, col)| col as usize).unwrap_or(0);

        let mut sheet = Sheet::new(sheet_name);
        for cells in range.rows() {
            let mut row = vec![CellValue::Empty; col_offset];
            row.extend(cells.iter().map(convert_cell));
            sheet.push_row(row);
        }
        debug!(sheet = %sheet.name, rows = sheet.rows.len(), "read worksheet");
        workbook.push_sheet(sheet);
    }
    Ok(workbook)
}
