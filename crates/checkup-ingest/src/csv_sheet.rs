//! CSV files as sheets.
//!
//! CSV carries no cell types, so every non-empty cell becomes text.

use std::path::Path;

use checkup_model::{CellValue, Sheet, Workbook};
use csv::ReaderBuilder;
use tracing::debug;

use crate::discovery::list_csv_files;
use crate::error::{IngestError, Result};

fn normalize_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim().trim_matches('\u{feff}').trim();
    if trimmed.is_empty() {
        CellValue::Empty
    } else {
        CellValue::Text(trimmed.to_string())
    }
}

fn sheet_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Reads one CSV file into a sheet named after the file stem.
///
/// Every record is kept, header included; ragged rows are allowed.
pub fn read_csv_sheet(path: &Path) -> Result<Sheet> {
    let csv_error = |source| IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(csv_error)?;
    let mut sheet = Sheet::new(sheet_name(path));
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        sheet.push_row(record.iter().map(normalize_cell).collect());
    }
    debug!(path = %path.display(), rows = sheet.rows.len(), "read csv sheet");
    Ok(sheet)
}

/// Reads every CSV file in a directory, one sheet per file.
pub fn read_csv_directory(dir: &Path) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    for path in list_csv_files(dir)? {
        workbook.push_sheet(read_csv_sheet(&path)?);
    }
    Ok(workbook)
}
