use std::collections::BTreeSet;

use checkup_model::{PersonRecord, StationDefinition};

use crate::catalog::StationCatalog;

/// Union of the stations required by any person in a dataset.
#[derive(Debug, Default)]
pub struct ActiveStationCollector {
    seen: BTreeSet<String>,
}

impl ActiveStationCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, person: &PersonRecord) {
        self.seen
            .extend(person.required_stations.iter().cloned());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.seen.contains(key)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Checkup stations seen at least once, in catalog order.
    pub fn finish(self, catalog: &StationCatalog) -> Vec<&'static StationDefinition> {
        catalog
            .checkup_stations()
            .filter(|station| self.seen.contains(station.key))
            .collect()
    }
}
