use std::collections::BTreeMap;

/// Employee id to free-text note lookup.
///
/// Keys and values are stored trimmed; empty ids or notes are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteIndex {
    notes: BTreeMap<String, String>,
}

impl NoteIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a note, replacing any earlier note for the same id.
    ///
    /// Returns false when either side is empty after trimming.
    pub fn insert(&mut self, employee_id: &str, note: &str) -> bool {
        let employee_id = employee_id.trim();
        let note = note.trim();
        if employee_id.is_empty() || note.is_empty() {
            return false;
        }
        self.notes.insert(employee_id.to_string(), note.to_string());
        true
    }

    pub fn get(&self, employee_id: &str) -> Option<&str> {
        self.notes.get(employee_id.trim()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_blank_entries_and_overwrites_duplicates() {
        let mut index = NoteIndex::new();
        assert!(!index.insert("  ", "note"));
        assert!(!index.insert("E1", "   "));
        assert!(index.insert(" E1 ", " first "));
        assert!(index.insert("E1", "second"));
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("E1"), Some("second"));
        assert_eq!(index.get("E2"), None);
    }
}
