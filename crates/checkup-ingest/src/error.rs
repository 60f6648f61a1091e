//! Error types for checkup data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while decoding an input file.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input path does not exist.
    #[error("input not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File extension is not a supported spreadsheet or CSV format.
    #[error("unsupported input format: {path}")]
    UnsupportedFormat { path: PathBuf },

    // === Decoding Errors ===
    /// calamine failed to open or read the workbook.
    #[error("failed to read workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    /// Failed to parse a CSV file.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Input decoded to zero sheets.
    #[error("no sheets found in {path}")]
    NoSheets { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/export.xlsx"),
        };
        assert_eq!(err.to_string(), "input not found: /data/export.xlsx");

        let err = IngestError::Workbook {
            path: PathBuf::from("export.xlsx"),
            message: "invalid zip header".to_string(),
        };
        assert!(err.to_string().contains("invalid zip header"));
    }
}
