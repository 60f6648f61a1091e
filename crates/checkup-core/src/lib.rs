//! Derivation engine for health checkup exports.
//!
//! Rows from the primary sheet are evaluated against the fixed
//! [`catalog::STATION_CATALOG`]: each checkup station is classified as
//! checked, unchecked or not required for a person, the person's overall
//! status is derived, and the stations exercised by the dataset are collected
//! in catalog order.

pub mod catalog;
pub mod collector;
pub mod dates;
pub mod evaluator;
pub mod notes;
pub mod person;
pub mod process;
pub mod sentinels;
pub mod summary;

pub use catalog::{STATION_CATALOG, StationCatalog};
pub use collector::ActiveStationCollector;
pub use dates::{format_display_date, format_display_date_str};
pub use evaluator::{StationOutcome, evaluate_markers, evaluate_station};
pub use notes::build_note_index;
pub use person::PersonRecordBuilder;
pub use process::{CheckupProcessor, process, process_workbook};
pub use summary::summarize;
