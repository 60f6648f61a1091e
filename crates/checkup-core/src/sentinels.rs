//! Marker strings recognised in checkup cells.
//!
//! Cell values are compared after [`normalize_marker`].

/// Station completed.
pub const CHECKED: &str = "checked";
/// Station required but not yet completed.
pub const UNCHECKED: &str = "unchecked";
/// Empty cell.
pub const EMPTY: &str = "";
/// Placeholder for a sub-column that does not apply.
pub const DASH: &str = "-";

/// Registration-date values meaning the person has not registered yet.
pub const NOT_REGISTERED: [&str; 2] = ["ยังไม่ได้ลงทะเบียน", "ยังไม่ลงทะเบียน"];

/// Lower-cases and trims a raw cell string.
pub fn normalize_marker(value: &str) -> String {
    value.trim().to_lowercase()
}

/// True for values that carry no station signal in a combined station.
pub fn is_blank_marker(value: &str) -> bool {
    value == EMPTY || value == DASH
}

/// True when a normalized registration value means "not registered".
pub fn is_unregistered_marker(value: &str) -> bool {
    value.is_empty() || NOT_REGISTERED.contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(normalize_marker("  Checked "), CHECKED);
        assert_eq!(normalize_marker("UNCHECKED"), UNCHECKED);
        assert_eq!(normalize_marker("   "), EMPTY);
    }

    #[test]
    fn registration_sentinels() {
        assert!(is_unregistered_marker(""));
        assert!(is_unregistered_marker("ยังไม่ลงทะเบียน"));
        assert!(is_unregistered_marker("ยังไม่ได้ลงทะเบียน"));
        assert!(!is_unregistered_marker("2024-01-15"));
    }
}
