//! In-memory decoded workbook and the sheet access seam used by the core.

use crate::cell::{CellValue, RawRow};
use crate::error::SheetError;

/// Access to decoded sheets.
///
/// Implemented by [`Workbook`]; decoders for concrete file formats build one.
pub trait SheetSource {
    /// Sheet names in workbook order.
    fn sheet_names(&self) -> Vec<String>;

    /// Rows keyed by column letter, skipping fully blank rows.
    fn lettered_rows(&self, sheet: &str) -> Result<Vec<RawRow>, SheetError>;

    /// Rows as positional cells, blank rows included.
    fn positional_rows(&self, sheet: &str) -> Result<Vec<Vec<CellValue>>, SheetError>;

    /// Actual name of the sheet matching `wanted` case-insensitively.
    fn find_sheet(&self, wanted: &str) -> Option<String> {
        let wanted = wanted.to_lowercase();
        self.sheet_names()
            .into_iter()
            .find(|name| name.to_lowercase() == wanted)
    }
}

/// One decoded sheet; rows hold cells starting at column `A`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_row<I, V>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        self.push_row(cells.into_iter().map(Into::into).collect());
        self
    }

    pub fn push_row(&mut self, row: Vec<CellValue>) {
        self.rows.push(row);
    }
}

/// Decoded workbook: an ordered list of sheets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_sheet(mut self, sheet: Sheet) -> Self {
        self.sheets.push(sheet);
        self
    }

    pub fn push_sheet(&mut self, sheet: Sheet) {
        self.sheets.push(sheet);
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|sheet| sheet.name == name)
    }

    fn require(&self, name: &str) -> Result<&Sheet, SheetError> {
        self.sheet(name).ok_or_else(|| SheetError::SheetNotFound {
            sheet: name.to_string(),
        })
    }
}

impl SheetSource for Workbook {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|sheet| sheet.name.clone()).collect()
    }

    fn lettered_rows(&self, sheet: &str) -> Result<Vec<RawRow>, SheetError> {
        let sheet = self.require(sheet)?;
        Ok(sheet
            .rows
            .iter()
            .map(|cells| RawRow::from_cells(cells.iter().cloned()))
            .filter(|row| !row.is_blank())
            .collect())
    }

    fn positional_rows(&self, sheet: &str) -> Result<Vec<Vec<CellValue>>, SheetError> {
        Ok(self.require(sheet)?.rows.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_sheets_case_insensitively() {
        let workbook = Workbook::new()
            .with_sheet(Sheet::new("Status"))
            .with_sheet(Sheet::new("NOTE"));
        assert_eq!(workbook.find_sheet("status"), Some("Status".to_string()));
        assert_eq!(workbook.find_sheet("note"), Some("NOTE".to_string()));
        assert_eq!(workbook.find_sheet("summary"), None);
    }

    #[test]
    fn lettered_rows_skip_blank_rows() {
        let workbook = Workbook::new().with_sheet(
            Sheet::new("Status")
                .with_row(["1", "HN1"])
                .with_row(["", ""])
                .with_row(["2", "HN2"]),
        );
        let rows = workbook.lettered_rows("Status").expect("rows");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].text("B"), "HN2");
        assert_eq!(workbook.positional_rows("Status").expect("rows").len(), 3);
    }

    #[test]
    fn unknown_sheet_is_an_error() {
        let workbook = Workbook::new();
        assert!(matches!(
            workbook.lettered_rows("Status"),
            Err(SheetError::SheetNotFound { .. })
        ));
    }
}
