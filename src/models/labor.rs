//! Activity-code (labor) model and lookup table.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One activity-code entry from the labor lookup sheet.
///
/// `activity_id` and `labor_code` often arrive from numeric spreadsheet
/// storage with a trailing ".0"; the enrichment joiner strips the fraction
/// before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaborEntry {
    /// The activity code this entry is keyed by.
    pub code: String,
    /// Human-readable labor description.
    #[serde(default)]
    pub description: String,
    /// The payroll activity ID.
    #[serde(default)]
    pub activity_id: String,
    /// The payroll labor code.
    #[serde(default)]
    pub labor_code: String,
}

/// Labor lookup table keyed by trimmed activity code.
///
/// Source data is expected de-duplicated by code; when duplicates slip
/// through, the first entry wins.
#[derive(Debug, Clone, Default)]
pub struct LaborTable {
    entries: HashMap<String, LaborEntry>,
}

impl LaborTable {
    /// Builds a table from labor entries, trimming codes.
    pub fn from_entries(entries: Vec<LaborEntry>) -> Self {
        let mut map = HashMap::with_capacity(entries.len());
        for entry in entries {
            map.entry(entry.code.trim().to_string()).or_insert(entry);
        }
        Self { entries: map }
    }

    /// Looks up a labor entry by activity code (trimmed exact match).
    pub fn lookup(&self, code: &str) -> Option<&LaborEntry> {
        self.entries.get(code.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(code: &str, description: &str) -> LaborEntry {
        LaborEntry {
            code: code.to_string(),
            description: description.to_string(),
            activity_id: "114.0".to_string(),
            labor_code: "27.0".to_string(),
        }
    }

    #[test]
    fn test_lookup_trims_both_sides() {
        let table = LaborTable::from_entries(vec![entry(" A120 ", "EMPAQUE")]);
        assert_eq!(table.lookup("A120").unwrap().description, "EMPAQUE");
    }

    #[test]
    fn test_missing_code_returns_none() {
        let table = LaborTable::from_entries(vec![]);
        assert!(table.lookup("A120").is_none());
    }

    #[test]
    fn test_duplicate_codes_first_entry_wins() {
        let table =
            LaborTable::from_entries(vec![entry("A120", "FIRST"), entry("A120", "SECOND")]);
        assert_eq!(table.lookup("A120").unwrap().description, "FIRST");
    }
}
