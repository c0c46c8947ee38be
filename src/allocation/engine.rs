//! Batch allocation pipeline.
//!
//! Ties the per-row stages together: classify the area, resolve the daily
//! factors, decompose into allocation records, enrich from the roster and
//! labor tables, and attach the rendered payroll lines. The whole batch is
//! a pure, single-threaded transformation of fully materialized in-memory
//! tables; output order follows input row order.

use crate::config::AllocationRules;
use crate::models::{
    AllocationRecord, FactorRecord, FactorTable, LaborTable, RosterTable, Shift, TimesheetRow,
};

use super::area::classify_area;
use super::decompose::decompose;
use super::enrich::enrich_records;
use super::format::format_payroll_line;

/// Runs the full allocation pipeline over a timesheet batch.
///
/// Emits one or two allocation records per input row, in input order, with
/// split records in their fixed primary-then-maquila order. Every record
/// comes back enriched and with both payroll lines rendered. For identical
/// inputs the output is byte-identical across runs.
///
/// # Example
///
/// ```
/// use allocation_engine::allocation::allocate_batch;
/// use allocation_engine::config::AllocationRules;
/// use allocation_engine::models::{
///     FactorRow, FactorTable, LaborTable, RosterTable, TimesheetRow,
/// };
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let rules = AllocationRules::default();
/// let date = NaiveDate::from_ymd_opt(2025, 6, 2);
/// let timesheet = vec![TimesheetRow {
///     employee_id: "44556677".to_string(),
///     date,
///     area: "PRODUCCION".to_string(),
///     cost_center: "PROD_01".to_string(),
///     activity_code: "A120".to_string(),
///     day_hours: Decimal::new(10, 0),
///     night_hours: Decimal::new(2, 0),
///     full_name: String::new(),
/// }];
/// let factors = FactorTable::from_rows(vec![FactorRow {
///     date: date.unwrap(),
///     area: "PRODUCCION".to_string(),
///     packing: Decimal::new(7, 1),
///     maquila: Decimal::new(3, 1),
/// }]);
///
/// let records = allocate_batch(
///     &timesheet,
///     &factors,
///     &RosterTable::default(),
///     &LaborTable::default(),
///     &rules,
/// );
/// assert_eq!(records.len(), 2);
/// assert!(records[0].txt_day.starts_with("0002|20250602|000004|01|"));
/// ```
pub fn allocate_batch(
    timesheet: &[TimesheetRow],
    factors: &FactorTable,
    roster: &RosterTable,
    labor: &LaborTable,
    rules: &AllocationRules,
) -> Vec<AllocationRecord> {
    let mut records = Vec::with_capacity(timesheet.len() * 2);

    for row in timesheet {
        let bucket = classify_area(&row.area, rules);
        let resolved = bucket
            .factor_label(rules)
            .map(|label| factors.lookup(row.date, label))
            .unwrap_or(FactorRecord::ZERO);
        records.extend(decompose(row, resolved, rules));
    }

    enrich_records(&mut records, roster, labor);

    for record in records.iter_mut() {
        record.txt_day = format_payroll_line(record, Shift::Day, &rules.payroll);
        record.txt_night = format_payroll_line(record, Shift::Night, &rules.payroll);
    }

    records
}
