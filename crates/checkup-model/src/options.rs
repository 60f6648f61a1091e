//! Configuration options for checkup processing.
//!
//! The defaults are the fixed identifiers of the checkup export. The station
//! catalog is not configurable.

use serde::{Deserialize, Serialize};

/// Name of the primary data sheet (matched case-insensitively).
pub const DEFAULT_PRIMARY_SHEET: &str = "status";
/// Name of the auxiliary notes sheet (matched case-insensitively).
pub const DEFAULT_NOTES_SHEET: &str = "note";
/// Header label of the primary sheet's first column.
pub const DEFAULT_HEADER_LABEL: &str = "no";
/// Zero-based position of the employee id in a notes row.
pub const DEFAULT_NOTE_ID_COLUMN: usize = 2;
/// Zero-based position of the note text in a notes row.
pub const DEFAULT_NOTE_TEXT_COLUMN: usize = 5;

/// Options controlling how a workbook is located and read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingOptions {
    /// Primary data sheet name.
    pub primary_sheet: String,
    /// Notes sheet name; an absent notes sheet is not an error.
    pub notes_sheet: String,
    /// First-column label identifying a header row in the primary sheet.
    pub header_label: String,
    /// Position of the employee id within a notes row.
    pub note_id_column: usize,
    /// Position of the note text within a notes row.
    pub note_text_column: usize,
}

impl Default for ProcessingOptions {
    fn default() -> Self {
        Self {
            primary_sheet: DEFAULT_PRIMARY_SHEET.to_string(),
            notes_sheet: DEFAULT_NOTES_SHEET.to_string(),
            header_label: DEFAULT_HEADER_LABEL.to_string(),
            note_id_column: DEFAULT_NOTE_ID_COLUMN,
            note_text_column: DEFAULT_NOTE_TEXT_COLUMN,
        }
    }
}

impl ProcessingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_primary_sheet(mut self, name: impl Into<String>) -> Self {
        self.primary_sheet = name.into();
        self
    }

    #[must_use]
    pub fn with_notes_sheet(mut self, name: impl Into<String>) -> Self {
        self.notes_sheet = name.into();
        self
    }
}
