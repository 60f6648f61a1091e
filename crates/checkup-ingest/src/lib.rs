//! Decoding of checkup exports into an in-memory [`Workbook`].
//!
//! Spreadsheet workbooks (`.xlsx`, `.xlsm`, `.xlsb`, `.xls`, `.ods`) are read
//! with calamine. A single `.csv` file becomes one sheet named after the file
//! stem, and a directory of `.csv` files becomes one sheet per file.

pub mod csv_sheet;
pub mod discovery;
pub mod error;
pub mod spreadsheet;

use std::path::Path;

use checkup_model::Workbook;
use tracing::info;

pub use csv_sheet::{read_csv_directory, read_csv_sheet};
pub use discovery::{InputKind, detect_input_kind, list_csv_files};
pub use error::{IngestError, Result};
pub use spreadsheet::read_spreadsheet;

/// Reads any supported input into a [`Workbook`].
pub fn read_workbook(path: &Path) -> Result<Workbook> {
    let workbook = match detect_input_kind(path)? {
        InputKind::Spreadsheet => read_spreadsheet(path)?,
        InputKind::CsvFile => Workbook::new().with_sheet(read_csv_sheet(path)?),
        InputKind::CsvDirectory => read_csv_directory(path)?,
    };
    if workbook.sheets.is_empty() {
        return Err(IngestError::NoSheets {
            path: path.to_path_buf(),
        });
    }
    info!(
        path = %path.display(),
        sheets = workbook.sheets.len(),
        "loaded workbook"
    );
    Ok(workbook)
}
