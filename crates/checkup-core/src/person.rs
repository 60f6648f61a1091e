//! Builds one [`PersonRecord`] per primary-sheet row.

use std::collections::BTreeMap;

use checkup_model::{
    CellValue, NoteIndex, PersonRecord, PersonStatus, ProcessError, RawRow, Result,
    StationDefinition,
};

use crate::catalog::{StationCatalog, fields};
use crate::dates::format_display_date;
use crate::evaluator::evaluate_station;
use crate::sentinels::{is_unregistered_marker, normalize_marker};

/// Column letters of the demographic fields, resolved from the catalog.
#[derive(Debug, Clone, Copy)]
struct FieldColumns {
    no: &'static str,
    hn: &'static str,
    id: &'static str,
    name: &'static str,
    date: &'static str,
    time: &'static str,
    department: &'static str,
    position: &'static str,
    affiliation: &'static str,
}

impl FieldColumns {
    fn resolve(catalog: &StationCatalog) -> Result<Self> {
        let column = |key: &str| {
            catalog.column_of(key).ok_or_else(|| {
                ProcessError::internal(format!("catalog has no column for field '{key}'"))
            })
        };
        Ok(Self {
            no: column(fields::NO)?,
            hn: column(fields::HN)?,
            id: column(fields::ID)?,
            name: column(fields::NAME)?,
            date: column(fields::DATE)?,
            time: column(fields::TIME)?,
            department: column(fields::DEPARTMENT)?,
            position: column(fields::POSITION)?,
            affiliation: column(fields::AFFILIATION)?,
        })
    }
}

/// Derives person records for one dataset.
///
/// Built once per processing call; [`PersonRecordBuilder::build`] is then
/// applied to every row.
#[derive(Debug)]
pub struct PersonRecordBuilder<'a> {
    fields: FieldColumns,
    stations: Vec<&'static StationDefinition>,
    notes: &'a NoteIndex,
}

impl<'a> PersonRecordBuilder<'a> {
    /// Fails when the catalog lacks one of the demographic fields.
    pub fn new(catalog: &StationCatalog, notes: &'a NoteIndex) -> Result<Self> {
        Ok(Self {
            fields: FieldColumns::resolve(catalog)?,
            stations: catalog.checkup_stations().collect(),
            notes,
        })
    }

    pub fn build(&self, row: &RawRow) -> PersonRecord {
        let columns = self.fields;
        let employee_id = trimmed(row, columns.id);

        let registration = row.get(columns.date);
        let is_registered = !registration.is_falsy()
            && !is_unregistered_marker(&normalize_marker(&registration.to_text()));
        let date = if is_registered {
            format_display_date(registration)
        } else {
            String::new()
        };

        let mut stations = BTreeMap::new();
        let mut required_stations = Vec::new();
        let mut uncompleted_stations = Vec::new();
        for station in &self.stations {
            let outcome = evaluate_station(station, row);
            if !outcome.is_required() {
                continue;
            }
            required_stations.push(station.key.to_string());
            stations.insert(station.key.to_string(), outcome.is_checked());
            if !outcome.is_checked() {
                uncompleted_stations.push(station.label().to_string());
            }
        }

        let status = PersonStatus::derive(is_registered, uncompleted_stations.len());
        let note = self
            .notes
            .get(&employee_id)
            .map(str::to_string)
            .unwrap_or_default();

        PersonRecord {
            sequence: trimmed(row, columns.no),
            health_record_number: trimmed(row, columns.hn),
            name: trimmed(row, columns.name),
            date,
            time: time_text(row.get(columns.time)),
            department: trimmed(row, columns.department),
            position: trimmed(row, columns.position),
            affiliation: trimmed(row, columns.affiliation),
            note,
            stations,
            required_stations,
            uncompleted_stations,
            is_registered,
            status,
            employee_id,
        }
    }
}

/// Zero, `false` and empty cells read as an empty field.
fn trimmed(row: &RawRow, column: &str) -> String {
    match row.get(column) {
        cell if cell.is_falsy() => String::new(),
        CellValue::Text(text) => text.trim().to_string(),
        other => other.to_text(),
    }
}

fn time_text(cell: &CellValue) -> String {
    if cell.is_falsy() {
        String::new()
    } else {
        cell.to_time_text().trim().to_string()
    }
}
