//! Enrichment joiner.
//!
//! Attaches roster fields (hire date, display name) and activity-code fields
//! (labor description, activity ID, labor code) to allocation records by key
//! lookup. Fields are appended, never overwritten, which makes re-running
//! the joiner on already-enriched records a no-op. Missing matches leave the
//! fields blank; absence is valid and renders as an empty string downstream.

use crate::models::{AllocationRecord, LaborTable, RosterTable};

/// Strips the trailing fractional suffix a value picks up from numeric
/// spreadsheet storage ("27.0" becomes "27").
pub fn strip_fraction(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed.split('.').next().unwrap_or(trimmed)
}

/// Normalizes a payroll activity ID: strips the fractional suffix and
/// zero-pads with a leading "0". Blank input stays blank.
pub fn normalize_activity_id(raw: &str) -> String {
    let stripped = strip_fraction(raw);
    if stripped.is_empty() {
        String::new()
    } else {
        format!("0{stripped}")
    }
}

/// Enriches allocation records in place from the roster and labor tables.
///
/// At most one match per table is applied per record. Roster misses leave
/// the hire date unset and the display name as the sheet provided it;
/// labor misses leave the description and payroll codes blank.
pub fn enrich_records(
    records: &mut [AllocationRecord],
    roster: &RosterTable,
    labor: &LaborTable,
) {
    for record in records.iter_mut() {
        if let Some(entry) = roster.lookup(&record.employee_id) {
            if record.hire_date.is_none() {
                record.hire_date = entry.hire_date;
            }
            if record.full_name.trim().is_empty() {
                record.full_name = entry.full_name.trim().to_string();
            }
        }

        if let Some(entry) = labor.lookup(&record.activity_code) {
            if record.labor_description.is_empty() {
                record.labor_description = entry.description.trim().to_string();
            }
            if record.activity_id.is_empty() {
                record.activity_id = normalize_activity_id(&entry.activity_id);
            }
            if record.labor_code.is_empty() {
                record.labor_code = strip_fraction(&entry.labor_code).to_string();
            }
        }
    }
}
