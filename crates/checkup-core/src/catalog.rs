//! Station catalog of the checkup export.
//!
//! The catalog lists the demographic columns followed by every checkup
//! station, in the order used for display and tie-breaking downstream. It is
//! a static table and never changes at runtime.

use std::collections::BTreeSet;

use checkup_model::{MatchType, ProcessError, StationDefinition, column_index};

/// Keys of the demographic columns copied onto each person record.
pub mod fields {
    pub const NO: &str = "no";
    pub const HN: &str = "hn";
    pub const ID: &str = "id";
    pub const NAME: &str = "name";
    pub const DATE: &str = "date";
    pub const TIME: &str = "time";
    pub const CHECK_OUT: &str = "checkOut";
    pub const DEPARTMENT: &str = "department";
    pub const POSITION: &str = "position";
    pub const AFFILIATION: &str = "affiliation";
}

/// Upper bound on the number of columns one station may read.
pub const MAX_STATION_COLUMNS: usize = 3;

/// Ordered, immutable list of station definitions.
#[derive(Debug)]
pub struct StationCatalog {
    entries: &'static [StationDefinition],
}

/// The checkup export catalog.
pub static STATION_CATALOG: StationCatalog = StationCatalog::new(&[
    StationDefinition::field(fields::NO, &["A"]),
    StationDefinition::field(fields::HN, &["B"]),
    StationDefinition::field(fields::ID, &["C"]),
    StationDefinition::field(fields::NAME, &["D"]),
    StationDefinition::field(fields::DATE, &["E"]),
    StationDefinition::field(fields::TIME, &["F"]),
    StationDefinition::field(fields::CHECK_OUT, &["G"]),
    StationDefinition::field(fields::DEPARTMENT, &["H"]),
    StationDefinition::field(fields::POSITION, &["I"]),
    // "Company" in the export
    StationDefinition::field(fields::AFFILIATION, &["J"]),
    StationDefinition::single("foundDoctor", "พบแพทย์ (Doctor)", &["K"]),
    StationDefinition::combined("bloodTest", "เจาะเลือด (Blood Test)", &["L", "M", "N"]),
    StationDefinition::combined("urineTest", "เก็บปัสสาวะ (Urine)", &["O", "P"]),
    StationDefinition::single("xray", "X-ray", &["Q"]),
    StationDefinition::single("spirometry", "เป่าปอด (Spirometry)", &["R"]),
    StationDefinition::single("hearing", "การได้ยิน (Hearing)", &["S"]),
    StationDefinition::single("ekg", "คลื่นไฟฟ้าหัวใจ (ECG)", &["T"]),
    StationDefinition::single("pft", "คลื่นไฟฟ้าอับอากาศ (PFT)", &["U"]),
    StationDefinition::single("vision", "สายตาทั่วไป (Vision)", &["V"]),
    StationDefinition::single("occVision", "สายตาอาชีวอนามัย (Occ. Vision)", &["W"]),
    StationDefinition::single(
        "musculoskeletal",
        "กล้ามเนื้อมือแขนขาหลัง (Musculoskeletal)",
        &["X"],
    ),
    StationDefinition::single("tb", "TB วัณโรค", &["Y"]),
    StationDefinition::single("fluVaccine", "วัคซีนไข้หวัดใหญ่ (Flu Vaccine)", &["Z"]),
    StationDefinition::combined("stoolTest", "เก็บอุจจาระ (Stool)", &["AA", "AB"]),
    StationDefinition::single("papSmear", "Papsmear", &["AC"]),
    StationDefinition::single("certificate", "ใบรับรองแพทย์ (Certificate)", &["AD"]),
    StationDefinition::single("riskDocs", "ปัจจัยเสี่ยง (Risk Docs)", &["AE"]),
    StationDefinition::single("enzyme", "Enzyme", &["AF"]),
    StationDefinition::single("uaEndOfWeek", "UA แดง (End of week)", &["AL"]),
    StationDefinition::single("cashPayment", "ชำระเงินสด", &["AM"]),
]);

impl StationCatalog {
    pub const fn new(entries: &'static [StationDefinition]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'static [StationDefinition] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checkup stations (demographic columns excluded) in catalog order.
    pub fn checkup_stations(&self) -> impl Iterator<Item = &'static StationDefinition> {
        self.entries.iter().filter(|station| station.is_checkup())
    }

    pub fn get(&self, key: &str) -> Option<&'static StationDefinition> {
        self.entries.iter().find(|station| station.key == key)
    }

    /// First column of the entry with `key`.
    pub fn column_of(&self, key: &str) -> Option<&'static str> {
        self.get(key)
            .and_then(|station| station.columns.first().copied())
    }

    /// Checks the structural invariants of the catalog.
    ///
    /// Keys are unique, every entry reads 1 to [`MAX_STATION_COLUMNS`]
    /// uppercase column letters, single stations read exactly one column, and only
    /// checkup stations carry a display name.
    pub fn validate(&self) -> Result<(), ProcessError> {
        let mut keys = BTreeSet::new();
        for station in self.entries {
            if !keys.insert(station.key) {
                return Err(ProcessError::internal(format!(
                    "duplicate station key '{}'",
                    station.key
                )));
            }
            if station.columns.is_empty() || station.columns.len() > MAX_STATION_COLUMNS {
                return Err(ProcessError::internal(format!(
                    "station '{}' reads {} columns",
                    station.key,
                    station.columns.len()
                )));
            }
            if let Some(column) = station
                .columns
                .iter()
                .find(|column| !is_column_letter(column))
            {
                return Err(ProcessError::internal(format!(
                    "station '{}' has invalid column '{column}'",
                    station.key
                )));
            }
            match (station.match_type, station.display_name) {
                (Some(MatchType::Single), _) if station.columns.len() != 1 => {
                    return Err(ProcessError::internal(format!(
                        "single station '{}' must read exactly one column",
                        station.key
                    )));
                }
                (Some(_), None) => {
                    return Err(ProcessError::internal(format!(
                        "station '{}' has no display name",
                        station.key
                    )));
                }
                (None, Some(_)) => {
                    return Err(ProcessError::internal(format!(
                        "demographic column '{}' must not have a display name",
                        station.key
                    )));
                }
                _ => {}
            }
        }
        Ok(())
    }
}

/// Rows key their cells by uppercase letters, so lowercase columns never match.
fn is_column_letter(column: &str) -> bool {
    column.bytes().all(|byte| byte.is_ascii_uppercase()) && column_index(column).is_some()
}
