//! Per-person, per-station marker evaluation.

use checkup_model::{MatchType, RawRow, StationDefinition};

use crate::sentinels::{CHECKED, UNCHECKED, is_blank_marker, normalize_marker};

/// Classification of one station for one person.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationOutcome {
    /// Required and completed.
    Checked,
    /// Required but not completed.
    Unchecked,
    /// Does not apply to this person.
    NotRequired,
}

impl StationOutcome {
    pub fn is_required(self) -> bool {
        !matches!(self, StationOutcome::NotRequired)
    }

    pub fn is_checked(self) -> bool {
        matches!(self, StationOutcome::Checked)
    }
}

/// Evaluates a station against a row.
///
/// Demographic columns are never required.
pub fn evaluate_station(station: &StationDefinition, row: &RawRow) -> StationOutcome {
    let Some(match_type) = station.match_type else {
        return StationOutcome::NotRequired;
    };
    let values: Vec<String> = station
        .columns
        .iter()
        .map(|column| normalize_marker(&row.text(column)))
        .collect();
    evaluate_markers(match_type, &values)
}

/// Applies the station decision table to normalized marker values.
///
/// A single station reads only its first value. A combined station is
/// checked when any value is checked; it is unchecked when every value is
/// unchecked, empty or a dash and at least one is unchecked. Any other mix,
/// including unrecognised values, means not required.
pub fn evaluate_markers<S: AsRef<str>>(match_type: MatchType, values: &[S]) -> StationOutcome {
    match match_type {
        MatchType::Single => match values.first().map(AsRef::as_ref) {
            Some(CHECKED) => StationOutcome::Checked,
            Some(UNCHECKED) => StationOutcome::Unchecked,
            _ => StationOutcome::NotRequired,
        },
        MatchType::Combined => {
            if values.iter().any(|value| value.as_ref() == CHECKED) {
                return StationOutcome::Checked;
            }
            let all_quiet = values.iter().all(|value| {
                let value = value.as_ref();
                value == UNCHECKED || is_blank_marker(value)
            });
            if all_quiet && values.iter().any(|value| value.as_ref() == UNCHECKED) {
                StationOutcome::Unchecked
            } else {
                StationOutcome::NotRequired
            }
        }
    }
}
