use thiserror::Error;

/// Failures raised by a [`crate::SheetSource`] implementation.
#[derive(Debug, Error)]
pub enum SheetError {
    #[error("sheet '{sheet}' not found in workbook")]
    SheetNotFound { sheet: String },
}

/// Terminal failures of one processing attempt.
///
/// `MissingSheet`, `EmptyData` and `NoValidRecords` describe a bad input
/// shape and carry a user-facing message. `Source` and `Internal` are
/// unexpected faults.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("the required sheet '{sheet}' was not found")]
    MissingSheet { sheet: String },

    #[error("the '{sheet}' sheet contains no data")]
    EmptyData { sheet: String },

    #[error("no valid records found; check for 'Checked'/'Unchecked' values")]
    NoValidRecords,

    #[error("failed to read sheet data: {0}")]
    Source(#[from] SheetError),

    #[error("an unexpected error occurred while processing the file: {message}")]
    Internal { message: String },
}

impl ProcessError {
    /// True for the three input-shape errors, false for unexpected faults.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ProcessError::MissingSheet { .. }
                | ProcessError::EmptyData { .. }
                | ProcessError::NoValidRecords
        )
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ProcessError::Internal {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProcessError>;
