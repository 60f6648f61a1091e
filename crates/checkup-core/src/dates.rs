//! Registration date display formatting.
//!
//! Dates are shown as `DD/MM/YYYY`. Values that do not start with a
//! `YYYY-MM-DD` prefix pass through unchanged.

use checkup_model::CellValue;

const DATE_PREFIX_LEN: usize = 10;

/// Formats a date-like cell as `DD/MM/YYYY`.
///
/// Native date-times format directly; text goes through
/// [`format_display_date_str`] after trimming. Empty, zero and `false` cells
/// give an empty string.
pub fn format_display_date(value: &CellValue) -> String {
    match value {
        value if value.is_falsy() => String::new(),
        CellValue::DateTime(datetime) => datetime.format("%d/%m/%Y").to_string(),
        CellValue::Text(text) => format_display_date_str(text.trim()),
        other => format_display_date_str(&other.to_text()),
    }
}

/// Reorders a `YYYY-MM-DD`-prefixed string into `DD/MM/YYYY`.
///
/// Only the first ten characters are inspected. Anything shorter, or a
/// prefix that is not three dash-separated parts led by a four-character
/// year, is returned unchanged.
pub fn format_display_date_str(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    let prefix = match value.char_indices().nth(DATE_PREFIX_LEN) {
        Some((end, _)) => &value[..end],
        None if value.chars().count() == DATE_PREFIX_LEN => value,
        None => return value.to_string(),
    };
    let parts: Vec<&str> = prefix.split('-').collect();
    match parts.as_slice() {
        [year, month, day] if year.chars().count() == 4 => format!("{day}/{month}/{year}"),
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reorders_iso_dates() {
        assert_eq!(format_display_date_str("2024-01-15"), "15/01/2024");
        assert_eq!(format_display_date_str("2024-01-15T08:30:00"), "15/01/2024");
    }

    #[test]
    fn falsy_cells_format_as_empty() {
        assert_eq!(format_display_date(&CellValue::Number(0.0)), "");
        assert_eq!(format_display_date(&CellValue::Bool(false)), "");
        assert_eq!(format_display_date(&CellValue::Empty), "");
    }

    #[test]
    fn passes_through_other_values() {
        assert_eq!(format_display_date_str(""), "");
        assert_eq!(format_display_date_str("15/01/2024"), "15/01/2024");
        assert_eq!(format_display_date_str("2024-01"), "2024-01");
        assert_eq!(format_display_date_str("24-01-15-xx"), "24-01-15-xx");
        assert_eq!(format_display_date_str("ลงทะเบียนแล้ว วันนี้"), "ลงทะเบียนแล้ว วันนี้");
    }
}
