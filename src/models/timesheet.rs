//! Timesheet row model.
//!
//! This module defines the canonical timesheet row the allocation core
//! operates on. Column-name fuzzy matching happens upstream in the
//! normalizer collaborator; by the time a row reaches this crate it already
//! carries the canonical field names below.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::lenient;

/// One employee-day-activity entry from the uploaded timesheet.
///
/// Parsed once at the ingestion boundary and immutable thereafter. Hour
/// fields deserialize leniently: unparseable values coerce to zero rather
/// than failing the batch.
///
/// # Example
///
/// ```
/// use allocation_engine::models::TimesheetRow;
///
/// let json = r#"{
///     "employee_id": "44556677",
///     "date": "2025-06-02",
///     "area": "PRODUCCION",
///     "cost_center": "PROD_01",
///     "activity_code": "A120",
///     "day_hours": "8",
///     "night_hours": 0
/// }"#;
/// let row: TimesheetRow = serde_json::from_str(json).unwrap();
/// assert_eq!(row.area, "PRODUCCION");
/// assert_eq!(row.day_hours.to_string(), "8");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimesheetRow {
    /// The employee's national ID.
    pub employee_id: String,
    /// The work date. Rows without a parseable date are carried through;
    /// their factor lookup misses and the payroll line renders an empty
    /// date field.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// The raw area name as entered in the timesheet.
    pub area: String,
    /// The raw cost-center code (CECO). Defaults to "Sin CECO" when the
    /// source sheet has no such column.
    #[serde(default = "default_cost_center")]
    pub cost_center: String,
    /// The activity code, used for the labor-code join.
    #[serde(default)]
    pub activity_code: String,
    /// Day-shift hours worked.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub day_hours: Decimal,
    /// Night-shift hours worked.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub night_hours: Decimal,
    /// The employee's display name, if the sheet carries one. Backfilled
    /// from the roster during enrichment when blank.
    #[serde(default)]
    pub full_name: String,
}

fn default_cost_center() -> String {
    "Sin CECO".to_string()
}
