use std::fmt;

use serde::Serialize;

/// How a checkup station reads its columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// One column carries the station marker.
    Single,
    /// Several columns are aggregated (any checked / all unchecked-or-empty).
    Combined,
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchType::Single => f.write_str("single"),
            MatchType::Combined => f.write_str("combined"),
        }
    }
}

/// One entry of the station catalog.
///
/// Demographic columns have neither a display name nor a match type and are
/// never required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StationDefinition {
    pub key: &'static str,
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<&'static str>,
    #[serde(rename = "cols")]
    pub columns: &'static [&'static str],
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub match_type: Option<MatchType>,
}

impl StationDefinition {
    /// A demographic column copied onto the person record.
    pub const fn field(key: &'static str, columns: &'static [&'static str]) -> Self {
        Self {
            key,
            display_name: None,
            columns,
            match_type: None,
        }
    }

    /// A checkup station read from exactly one column.
    pub const fn single(
        key: &'static str,
        display_name: &'static str,
        columns: &'static [&'static str],
    ) -> Self {
        Self {
            key,
            display_name: Some(display_name),
            columns,
            match_type: Some(MatchType::Single),
        }
    }

    /// A checkup station aggregated from several columns.
    pub const fn combined(
        key: &'static str,
        display_name: &'static str,
        columns: &'static [&'static str],
    ) -> Self {
        Self {
            key,
            display_name: Some(display_name),
            columns,
            match_type: Some(MatchType::Combined),
        }
    }

    pub fn is_checkup(&self) -> bool {
        self.match_type.is_some()
    }

    /// Display name, falling back to the key.
    pub fn label(&self) -> &'static str {
        self.display_name.unwrap_or(self.key)
    }
}
