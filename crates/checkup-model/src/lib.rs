pub mod cell;
pub mod error;
pub mod notes;
pub mod options;
pub mod person;
pub mod processing;
pub mod station;
pub mod workbook;

pub use cell::{CellValue, RawRow, column_index, column_letter};
pub use error::{ProcessError, Result, SheetError};
pub use notes::NoteIndex;
pub use options::ProcessingOptions;
pub use person::{PersonRecord, PersonStatus};
pub use processing::{ProcessingResult, ResultSummary, StationTally};
pub use station::{MatchType, StationDefinition};
pub use workbook::{Sheet, SheetSource, Workbook};
