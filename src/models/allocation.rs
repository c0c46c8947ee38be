//! Allocation record model: the core's output unit.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The shift a payroll line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shift {
    /// Day shift (payroll shift code "01").
    Day,
    /// Night shift (payroll shift code "03").
    Night,
}

impl std::fmt::Display for Shift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shift::Day => write!(f, "DIA"),
            Shift::Night => write!(f, "NOCHE"),
        }
    }
}

/// One derived hour-bucket line produced from a source timesheet row.
///
/// Created by the decomposition engine (one or two records per source row)
/// and never mutated afterwards except by the enrichment joiner, which
/// appends roster and labor fields without overwriting anything already
/// present. Absent lookups render as empty strings, never as a placeholder
/// token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationRecord {
    /// The employee's national ID, carried from the source row.
    pub employee_id: String,
    /// The work date, carried from the source row.
    pub date: Option<NaiveDate>,
    /// The raw area name, carried from the source row.
    pub area: String,
    /// The original cost-center code, carried from the source row.
    pub cost_center: String,
    /// The activity code, carried from the source row.
    pub activity_code: String,
    /// The employee's display name (from the sheet or the roster).
    #[serde(default)]
    pub full_name: String,
    /// The finalized cost center this record's hours are attributed to.
    pub final_cost_center: String,
    /// Day-shift hours for this bucket, rounded to 2 decimals.
    pub day_hours: Decimal,
    /// Night-shift hours for this bucket, rounded to 2 decimals.
    pub night_hours: Decimal,
    /// Hire date from the roster, if matched.
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
    /// Labor description from the activity-code table, if matched.
    #[serde(default)]
    pub labor_description: String,
    /// Normalized payroll activity ID (leading "0", fraction stripped).
    #[serde(default)]
    pub activity_id: String,
    /// Normalized payroll labor code (fraction stripped).
    #[serde(default)]
    pub labor_code: String,
    /// Rendered day-shift payroll line.
    #[serde(default)]
    pub txt_day: String,
    /// Rendered night-shift payroll line.
    #[serde(default)]
    pub txt_night: String,
}

impl AllocationRecord {
    /// Returns the hours attributed to the given shift.
    pub fn hours_for(&self, shift: Shift) -> Decimal {
        match shift {
            Shift::Day => self.day_hours,
            Shift::Night => self.night_hours,
        }
    }
}
