//! Loading [`ProcessingOptions`] from a TOML file.
//!
//! ```toml
//! primary_sheet = "status"
//! notes_sheet = "note"
//! header_label = "no"
//! note_id_column = 2
//! note_text_column = 5
//! ```
//!
//! Every key is optional; unknown keys are rejected.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use checkup_model::ProcessingOptions;
use tracing::debug;

/// Reads options from `path`, or returns the defaults when no path is given.
pub fn load_options(path: Option<&Path>) -> Result<ProcessingOptions> {
    let Some(path) = path else {
        return Ok(ProcessingOptions::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let options = parse_options(&text)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    debug!(
        config = %path.display(),
        primary_sheet = %options.primary_sheet,
        notes_sheet = %options.notes_sheet,
        "loaded processing options"
    );
    Ok(options)
}

pub fn parse_options(text: &str) -> Result<ProcessingOptions, toml::de::Error> {
    toml::from_str(text)
}
