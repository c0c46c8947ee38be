//! Validation summary over allocation records.
//!
//! Reproduces the per-(date, area, employee) control view the payroll team
//! signs off on: day/night hour sums at one decimal, a recomputed check sum,
//! a CORRECTO/INCORRECTO flag per group, and a grand-total row.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::AllocationRecord;

/// Outcome of the per-group sum check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationStatus {
    /// The group total matches its recomputed check sum.
    Correcto,
    /// The independently rounded sums disagree.
    Incorrecto,
}

impl std::fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationStatus::Correcto => write!(f, "CORRECTO"),
            ValidationStatus::Incorrecto => write!(f, "INCORRECTO"),
        }
    }
}

/// One validation group: all allocation records sharing a date, area, and
/// employee display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationRow {
    /// The group's work date.
    pub date: Option<NaiveDate>,
    /// The group's raw area name.
    pub area: String,
    /// The group's employee display name.
    pub full_name: String,
    /// Summed day hours, rounded to 1 decimal.
    pub day_hours: Decimal,
    /// Summed night hours, rounded to 1 decimal.
    pub night_hours: Decimal,
    /// Day plus night hours, rounded to 1 decimal before the split into
    /// shift columns.
    pub total_hours: Decimal,
    /// Check sum recomputed from the rounded shift columns.
    pub check_hours: Decimal,
    /// Whether the two totals agree.
    pub status: ValidationStatus,
}

/// Grand totals across all validation rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationTotals {
    /// Sum of the per-group day hours.
    pub day_hours: Decimal,
    /// Sum of the per-group night hours.
    pub night_hours: Decimal,
    /// Sum of the per-group totals.
    pub total_hours: Decimal,
    /// Sum of the per-group check sums.
    pub check_hours: Decimal,
}

/// The full validation view: one row per group plus the grand total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationSummary {
    /// Per-group rows, in first-appearance order of the input records.
    pub rows: Vec<ValidationRow>,
    /// The grand-total row.
    pub total: ValidationTotals,
}

/// Builds the validation summary from allocation records.
///
/// Groups appear in the order their first record appears in the input, so
/// the view is byte-identical across runs of the same batch.
pub fn summarize(records: &[AllocationRecord]) -> ValidationSummary {
    let mut order: Vec<(Option<NaiveDate>, String, String)> = Vec::new();
    let mut sums: HashMap<(Option<NaiveDate>, String, String), (Decimal, Decimal)> =
        HashMap::new();

    for record in records {
        let key = (
            record.date,
            record.area.clone(),
            record.full_name.clone(),
        );
        let entry = sums.entry(key.clone()).or_insert_with(|| {
            order.push(key);
            (Decimal::ZERO, Decimal::ZERO)
        });
        entry.0 += record.day_hours;
        entry.1 += record.night_hours;
    }

    let mut rows = Vec::with_capacity(order.len());
    let mut total = ValidationTotals {
        day_hours: Decimal::ZERO,
        night_hours: Decimal::ZERO,
        total_hours: Decimal::ZERO,
        check_hours: Decimal::ZERO,
    };

    for key in order {
        let (day_sum, night_sum) = sums[&key];
        let total_hours = (day_sum + night_sum).round_dp(1);
        let day_hours = day_sum.round_dp(1);
        let night_hours = night_sum.round_dp(1);
        let check_hours = (day_hours + night_hours).round_dp(1);
        let status = if total_hours == check_hours {
            ValidationStatus::Correcto
        } else {
            ValidationStatus::Incorrecto
        };

        total.day_hours += day_hours;
        total.night_hours += night_hours;
        total.total_hours += total_hours;
        total.check_hours += check_hours;

        rows.push(ValidationRow {
            date: key.0,
            area: key.1,
            full_name: key.2,
            day_hours,
            night_hours,
            total_hours,
            check_hours,
            status,
        });
    }

    total.day_hours = total.day_hours.round_dp(1);
    total.night_hours = total.night_hours.round_dp(1);
    total.total_hours = total.total_hours.round_dp(1);
    total.check_hours = total.check_hours.round_dp(1);

    ValidationSummary { rows, total }
}
