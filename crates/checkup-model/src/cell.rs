//! Decoded cell values and column-letter keyed rows.
//!
//! Sheet decoders hand the core rows whose cells are keyed by spreadsheet
//! column letters (`A`, `B`, ..., `AA`). Cells keep their native kind so the
//! date normalizer can tell a real date from text that only looks like one.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, Timelike};

/// A single decoded cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
}

static EMPTY_CELL: CellValue = CellValue::Empty;

impl CellValue {
    /// True for missing cells and for text that is empty.
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(text) => text.is_empty(),
            _ => false,
        }
    }

    /// True for empty cells, `0`, NaN and `false`.
    ///
    /// Export columns treat these the same as a missing value.
    pub fn is_falsy(&self) -> bool {
        match self {
            CellValue::Number(value) => *value == 0.0 || value.is_nan(),
            CellValue::Bool(value) => !value,
            other => other.is_empty(),
        }
    }

    /// Canonical string form of the cell.
    ///
    /// Integral numbers render without a fraction and date-times render as
    /// `YYYY-MM-DDTHH:MM:SS`.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(text) => text.clone(),
            CellValue::Number(value) => format_number(*value),
            CellValue::Bool(value) => value.to_string(),
            CellValue::DateTime(value) => value.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }

    /// String form for time-of-day columns.
    ///
    /// Native time cells render as `HH:MM`, or `HH:MM:SS` when seconds are set.
    /// Every other kind falls back to [`CellValue::to_text`].
    pub fn to_time_text(&self) -> String {
        match self {
            CellValue::DateTime(value) if value.second() == 0 => {
                value.format("%H:%M").to_string()
            }
            CellValue::DateTime(value) => value.format("%H:%M:%S").to_string(),
            other => other.to_text(),
        }
    }
}

fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(value: NaiveDateTime) -> Self {
        CellValue::DateTime(value)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(value: NaiveDate) -> Self {
        CellValue::DateTime(value.and_time(chrono::NaiveTime::MIN))
    }
}

/// Spreadsheet column letter for a zero-based column index (`0` -> `A`, `26` -> `AA`).
pub fn column_letter(index: usize) -> String {
    let mut letters = Vec::new();
    let mut remaining = index + 1;
    while remaining > 0 {
        let rem = (remaining - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        remaining = (remaining - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Zero-based column index for a column letter, case-insensitive.
pub fn column_index(letters: &str) -> Option<usize> {
    if letters.is_empty() {
        return None;
    }
    let mut index = 0usize;
    for ch in letters.chars() {
        if !ch.is_ascii_alphabetic() {
            return None;
        }
        let value = (ch.to_ascii_uppercase() as u8 - b'A') as usize + 1;
        index = index.checked_mul(26)?.checked_add(value)?;
    }
    Some(index - 1)
}

/// One data row keyed by column letter.
///
/// Missing columns read as [`CellValue::Empty`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    cells: BTreeMap<String, CellValue>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a row from positional cells, assigning letters from `A`.
    pub fn from_cells<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = CellValue>,
    {
        let mut row = Self::new();
        for (index, cell) in cells.into_iter().enumerate() {
            if !cell.is_empty() {
                row.cells.insert(column_letter(index), cell);
            }
        }
        row
    }

    /// Builder-style variant of [`RawRow::insert`].
    #[must_use]
    pub fn with_cell(mut self, column: &str, value: impl Into<CellValue>) -> Self {
        self.insert(column, value.into());
        self
    }

    pub fn insert(&mut self, column: &str, value: CellValue) {
        self.cells.insert(column.to_ascii_uppercase(), value);
    }

    pub fn get(&self, column: &str) -> &CellValue {
        self.cells.get(column).unwrap_or(&EMPTY_CELL)
    }

    /// Canonical string form of a column, empty when the column is missing.
    pub fn text(&self, column: &str) -> String {
        self.get(column).to_text()
    }

    /// True when every cell in the row is empty.
    pub fn is_blank(&self) -> bool {
        self.cells.values().all(CellValue::is_empty)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }
}
