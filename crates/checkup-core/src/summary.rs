use checkup_model::{PersonStatus, ProcessingResult, ResultSummary, StationTally};

/// Status totals and per-station completion counts for a result.
pub fn summarize(result: &ProcessingResult) -> ResultSummary {
    let stations = result
        .active_stations
        .iter()
        .map(|station| {
            let mut tally = StationTally {
                key: station.key,
                name: station.label(),
                required: 0,
                checked: 0,
            };
            for person in &result.persons {
                if person.is_required(station.key) {
                    tally.required += 1;
                    if person.is_checked(station.key) {
                        tally.checked += 1;
                    }
                }
            }
            tally
        })
        .collect();
    ResultSummary {
        total: result.persons.len(),
        complete: result.count_by_status(PersonStatus::Complete),
        incomplete: result.count_by_status(PersonStatus::Incomplete),
        not_registered: result.count_by_status(PersonStatus::NotRegistered),
        stations,
    }
}
