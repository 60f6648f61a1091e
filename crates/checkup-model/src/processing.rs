use serde::Serialize;

use crate::person::{PersonRecord, PersonStatus};
use crate::station::StationDefinition;

/// Outcome of processing one checkup export.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingResult {
    /// Person records with at least one required station, in row order.
    pub persons: Vec<PersonRecord>,
    /// Checkup stations required by at least one person, in catalog order.
    pub active_stations: Vec<&'static StationDefinition>,
}

impl ProcessingResult {
    pub fn count_by_status(&self, status: PersonStatus) -> usize {
        self.persons
            .iter()
            .filter(|person| person.status == status)
            .count()
    }
}

/// Completion counts for one active station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationTally {
    pub key: &'static str,
    pub name: &'static str,
    /// Persons for whom the station is required.
    pub required: usize,
    /// Persons who completed the station.
    pub checked: usize,
}

impl StationTally {
    pub fn pending(&self) -> usize {
        self.required.saturating_sub(self.checked)
    }
}

/// Aggregate view of a [`ProcessingResult`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSummary {
    pub total: usize,
    pub complete: usize,
    pub incomplete: usize,
    pub not_registered: usize,
    pub stations: Vec<StationTally>,
}
