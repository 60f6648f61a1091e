//! Input classification and CSV file discovery.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Spreadsheet extensions decoded with calamine.
pub const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// How an input path is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Spreadsheet,
    CsvFile,
    CsvDirectory,
}

/// Classifies an input path by type and extension (case-insensitive).
pub fn detect_input_kind(path: &Path) -> Result<InputKind> {
    if path.is_dir() {
        return Ok(InputKind::CsvDirectory);
    }
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    if extension == "csv" {
        Ok(InputKind::CsvFile)
    } else if SPREADSHEET_EXTENSIONS.contains(&extension.as_str()) {
        Ok(InputKind::Spreadsheet)
    } else {
        Err(IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
        })
    }
}

/// Lists all CSV files in a directory.
///
/// Returns files sorted by filename.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::FileNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();

        // Skip directories
        if !path.is_file() {
            continue;
        }

        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

        if is_csv {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}
