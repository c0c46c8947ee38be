//! Roster (employee identity) model and lookup table.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One roster entry, keyed by the employee's national ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// The employee's national ID.
    pub employee_id: String,
    /// The employee's hire date, if known.
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
    /// The employee's display name (surnames and given names).
    #[serde(default)]
    pub full_name: String,
}

/// Roster lookup table keyed by trimmed employee ID.
///
/// Source data is expected de-duplicated by ID; when duplicates slip
/// through, the first entry wins.
#[derive(Debug, Clone, Default)]
pub struct RosterTable {
    entries: HashMap<String, RosterEntry>,
}

impl RosterTable {
    /// Builds a table from roster entries, trimming IDs.
    pub fn from_entries(entries: Vec<RosterEntry>) -> Self {
        let mut map = HashMap::with_capacity(entries.len());
        for entry in entries {
            map.entry(entry.employee_id.trim().to_string())
                .or_insert(entry);
        }
        Self { entries: map }
    }

    /// Looks up a roster entry by employee ID (trimmed exact match).
    pub fn lookup(&self, employee_id: &str) -> Option<&RosterEntry> {
        self.entries.get(employee_id.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, name: &str) -> RosterEntry {
        RosterEntry {
            employee_id: id.to_string(),
            hire_date: NaiveDate::from_ymd_opt(2023, 3, 15),
            full_name: name.to_string(),
        }
    }

    #[test]
    fn test_lookup_trims_both_sides() {
        let table = RosterTable::from_entries(vec![entry(" 44556677 ", "QUISPE ROJAS, MARIA")]);
        let hit = table.lookup("44556677 ").unwrap();
        assert_eq!(hit.full_name, "QUISPE ROJAS, MARIA");
    }

    #[test]
    fn test_missing_id_returns_none() {
        let table = RosterTable::from_entries(vec![]);
        assert!(table.lookup("44556677").is_none());
    }

    #[test]
    fn test_duplicate_ids_first_entry_wins() {
        let table = RosterTable::from_entries(vec![
            entry("44556677", "FIRST"),
            entry("44556677", "SECOND"),
        ]);
        assert_eq!(table.lookup("44556677").unwrap().full_name, "FIRST");
    }

    #[test]
    fn test_deserialize_entry_without_hire_date() {
        let json = r#"{"employee_id": "44556677", "full_name": "QUISPE"}"#;
        let entry: RosterEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.hire_date, None);
    }
}
