use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Overall checkup status of one person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PersonStatus {
    NotRegistered,
    Incomplete,
    Complete,
}

impl PersonStatus {
    /// Status for a person given registration and the number of required
    /// stations still unchecked.
    pub fn derive(is_registered: bool, uncompleted: usize) -> Self {
        if !is_registered {
            PersonStatus::NotRegistered
        } else if uncompleted > 0 {
            PersonStatus::Incomplete
        } else {
            PersonStatus::Complete
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PersonStatus::NotRegistered => "not-registered",
            PersonStatus::Incomplete => "incomplete",
            PersonStatus::Complete => "complete",
        }
    }

    /// Display label used on checkup dashboards.
    pub fn label(self) -> &'static str {
        match self {
            PersonStatus::NotRegistered => "ยังไม่ลงทะเบียน",
            PersonStatus::Incomplete => "ตรวจไม่ครบ",
            PersonStatus::Complete => "ตรวจครบ",
        }
    }
}

impl fmt::Display for PersonStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived checkup record for one examined person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    /// Sequence number from the export.
    #[serde(rename = "no")]
    pub sequence: String,
    /// Health-record number.
    #[serde(rename = "hn")]
    pub health_record_number: String,
    #[serde(rename = "id")]
    pub employee_id: String,
    pub name: String,
    /// Registration date as `DD/MM/YYYY`, empty when not registered.
    pub date: String,
    pub time: String,
    pub department: String,
    pub position: String,
    pub affiliation: String,
    pub note: String,
    /// Checked flag per required station key.
    pub stations: BTreeMap<String, bool>,
    /// Required station keys in catalog order.
    pub required_stations: Vec<String>,
    /// Display names of required stations not yet checked, in catalog order.
    pub uncompleted_stations: Vec<String>,
    pub is_registered: bool,
    pub status: PersonStatus,
}

impl PersonRecord {
    pub fn is_complete(&self) -> bool {
        self.status == PersonStatus::Complete
    }

    pub fn is_required(&self, station_key: &str) -> bool {
        self.stations.contains_key(station_key)
    }

    pub fn is_checked(&self, station_key: &str) -> bool {
        self.stations.get(station_key).copied().unwrap_or(false)
    }

    pub fn completed_count(&self) -> usize {
        self.stations.values().filter(|checked| **checked).count()
    }
}
