//! Top-level processing of a checkup export.
//!
//! # Stages
//!
//! 1. Locate the primary sheet (required) and the notes sheet (optional).
//! 2. Drop a leading header row and reject a sheet without data rows.
//! 3. Build the note index and derive one person record per row.
//! 4. Drop persons with no required station and collect active stations.
//!
//! Processing is all-or-nothing: any failure discards the partial result.

use checkup_model::{
    CellValue, ProcessError, ProcessingOptions, ProcessingResult, RawRow, Result, SheetSource,
    column_letter,
};
use tracing::{debug, info, info_span};

use crate::catalog::{STATION_CATALOG, StationCatalog};
use crate::collector::ActiveStationCollector;
use crate::notes::build_note_index;
use crate::person::PersonRecordBuilder;

/// Processes a decoded workbook with the default options and catalog.
pub fn process_workbook<S>(source: &S, options: &ProcessingOptions) -> Result<ProcessingResult>
where
    S: SheetSource + ?Sized,
{
    CheckupProcessor::new(options.clone()).process_workbook(source)
}

/// Processes already-extracted primary rows and optional notes rows.
pub fn process(
    rows: Vec<RawRow>,
    notes: Option<&[Vec<CellValue>]>,
    options: &ProcessingOptions,
) -> Result<ProcessingResult> {
    CheckupProcessor::new(options.clone()).process(rows, notes)
}

/// Processing entry point bound to a catalog and options.
#[derive(Debug)]
pub struct CheckupProcessor {
    catalog: &'static StationCatalog,
    options: ProcessingOptions,
}

impl Default for CheckupProcessor {
    fn default() -> Self {
        Self::new(ProcessingOptions::default())
    }
}

impl CheckupProcessor {
    pub fn new(options: ProcessingOptions) -> Self {
        Self {
            catalog: &STATION_CATALOG,
            options,
        }
    }

    /// Replaces the station catalog.
    #[must_use]
    pub fn with_catalog(mut self, catalog: &'static StationCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn options(&self) -> &ProcessingOptions {
        &self.options
    }

    pub fn catalog(&self) -> &'static StationCatalog {
        self.catalog
    }

    /// Locates the primary and notes sheets by case-insensitive name and
    /// processes them.
    pub fn process_workbook<S>(&self, source: &S) -> Result<ProcessingResult>
    where
        S: SheetSource + ?Sized,
    {
        let Some(primary) = source.find_sheet(&self.options.primary_sheet) else {
            return Err(ProcessError::MissingSheet {
                sheet: self.options.primary_sheet.clone(),
            });
        };
        let rows = source.lettered_rows(&primary)?;
        let notes = match source.find_sheet(&self.options.notes_sheet) {
            Some(name) => Some(source.positional_rows(&name)?),
            None => {
                debug!(sheet = %self.options.notes_sheet, "notes sheet not present");
                None
            }
        };
        self.process_sheet(&primary, rows, notes.as_deref())
    }

    /// Processes primary rows keyed by column letter.
    pub fn process(
        &self,
        rows: Vec<RawRow>,
        notes: Option<&[Vec<CellValue>]>,
    ) -> Result<ProcessingResult> {
        self.process_sheet(&self.options.primary_sheet, rows, notes)
    }

    fn process_sheet(
        &self,
        sheet: &str,
        mut rows: Vec<RawRow>,
        notes: Option<&[Vec<CellValue>]>,
    ) -> Result<ProcessingResult> {
        let span = info_span!("process", sheet = %sheet, rows = rows.len());
        let _guard = span.enter();

        if self.is_header_row(rows.first()) {
            debug!("dropping header row");
            rows.remove(0);
        }
        if rows.is_empty() {
            return Err(ProcessError::EmptyData {
                sheet: sheet.to_string(),
            });
        }

        self.catalog.validate()?;
        let note_index = notes
            .map(|rows| build_note_index(rows, &self.options))
            .unwrap_or_default();
        let builder = PersonRecordBuilder::new(self.catalog, &note_index)?;

        let mut collector = ActiveStationCollector::new();
        let mut persons = Vec::with_capacity(rows.len());
        let mut dropped = 0usize;
        for (index, row) in rows.iter().enumerate() {
            let person = builder.build(row);
            if person.required_stations.is_empty() {
                debug!(row = index, "row has no required stations");
                dropped += 1;
                continue;
            }
            collector.record(&person);
            persons.push(person);
        }

        if persons.is_empty() {
            return Err(ProcessError::NoValidRecords);
        }
        let active_stations = collector.finish(self.catalog);
        info!(
            persons = persons.len(),
            dropped,
            active_stations = active_stations.len(),
            notes = note_index.len(),
            "processed checkup sheet"
        );
        Ok(ProcessingResult {
            persons,
            active_stations,
        })
    }

    fn is_header_row(&self, row: Option<&RawRow>) -> bool {
        let Some(row) = row else {
            return false;
        };
        let first = row.text(&column_letter(0)).trim().to_lowercase();
        first == self.options.header_label.trim().to_lowercase()
    }
}
