//! Payroll record formatter.
//!
//! Renders each allocation record into a fixed pipe-delimited text line per
//! shift for downstream payroll ingestion. The field layout is a
//! compatibility contract; any deviation breaks the downstream parser:
//!
//! ```text
//! 0002|<YYYYMMDD>|000004|<shiftCode>|<employeeID>|<activityID>|<laborCode>|<finalCostCenter>|<minutes>|
//! ```
//!
//! Missing values render as empty fields, never as a placeholder token.
//! Field values are assumed not to contain the `|` delimiter; no escaping
//! is applied.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::config::PayrollFormat;
use crate::models::{AllocationRecord, Shift};

/// Converts an hour value to whole minutes (round-half-to-even).
pub fn hours_to_minutes(hours: Decimal) -> i64 {
    (hours * Decimal::new(60, 0)).round().to_i64().unwrap_or(0)
}

/// Renders the payroll text line for one allocation record and shift.
///
/// # Example
///
/// ```
/// use allocation_engine::allocation::format_payroll_line;
/// use allocation_engine::config::AllocationRules;
/// use allocation_engine::models::{AllocationRecord, Shift};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let rules = AllocationRules::default();
/// let record = AllocationRecord {
///     employee_id: "44556677".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 6, 2),
///     area: "PRODUCCION".to_string(),
///     cost_center: "PROD_01".to_string(),
///     activity_code: "A120".to_string(),
///     full_name: String::new(),
///     final_cost_center: "PROCESO_PACK".to_string(),
///     day_hours: Decimal::new(700, 2),
///     night_hours: Decimal::new(140, 2),
///     hire_date: None,
///     labor_description: String::new(),
///     activity_id: "0114".to_string(),
///     labor_code: "27".to_string(),
///     txt_day: String::new(),
///     txt_night: String::new(),
/// };
///
/// let line = format_payroll_line(&record, Shift::Day, &rules.payroll);
/// assert_eq!(line, "0002|20250602|000004|01|44556677|0114|27|PROCESO_PACK|420|");
/// ```
pub fn format_payroll_line(
    record: &AllocationRecord,
    shift: Shift,
    payroll: &PayrollFormat,
) -> String {
    let date = record
        .date
        .map(|d| d.format("%Y%m%d").to_string())
        .unwrap_or_default();
    let shift_code = match shift {
        Shift::Day => &payroll.day_shift_code,
        Shift::Night => &payroll.night_shift_code,
    };
    let minutes = hours_to_minutes(record.hours_for(shift));

    format!(
        "{}|{}|{}|{}|{}|{}|{}|{}|{}|",
        payroll.company_code,
        date,
        payroll.record_type,
        shift_code,
        record.employee_id.trim(),
        record.activity_id.trim(),
        record.labor_code.trim(),
        record.final_cost_center.trim(),
        minutes
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AllocationRules;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn record() -> AllocationRecord {
        AllocationRecord {
            employee_id: "44556677".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 2),
            area: "PRODUCCION".to_string(),
            cost_center: "PROD_01".to_string(),
            activity_code: "A120".to_string(),
            full_name: "QUISPE ROJAS, MARIA".to_string(),
            final_cost_center: "PROCESO_PACK".to_string(),
            day_hours: dec("7.00"),
            night_hours: dec("1.40"),
            hire_date: None,
            labor_description: "EMPAQUE DE FRUTA".to_string(),
            activity_id: "0114".to_string(),
            labor_code: "27".to_string(),
            txt_day: String::new(),
            txt_night: String::new(),
        }
    }

    #[test]
    fn test_day_line_layout() {
        let rules = AllocationRules::default();
        let line = format_payroll_line(&record(), Shift::Day, &rules.payroll);
        assert_eq!(line, "0002|20250602|000004|01|44556677|0114|27|PROCESO_PACK|420|");
    }

    #[test]
    fn test_night_line_uses_night_code_and_hours() {
        let rules = AllocationRules::default();
        let line = format_payroll_line(&record(), Shift::Night, &rules.payroll);
        assert_eq!(line, "0002|20250602|000004|03|44556677|0114|27|PROCESO_PACK|84|");
    }

    #[test]
    fn test_missing_date_renders_empty_field() {
        let rules = AllocationRules::default();
        let mut r = record();
        r.date = None;
        let line = format_payroll_line(&r, Shift::Day, &rules.payroll);
        assert!(line.starts_with("0002||000004|01|"));
    }

    #[test]
    fn test_missing_codes_render_empty_not_placeholder() {
        let rules = AllocationRules::default();
        let mut r = record();
        r.activity_id = String::new();
        r.labor_code = String::new();
        let line = format_payroll_line(&r, Shift::Day, &rules.payroll);
        assert_eq!(line, "0002|20250602|000004|01|44556677|||PROCESO_PACK|420|");
        assert!(!line.contains("None"));
        assert!(!line.contains("null"));
    }

    #[test]
    fn test_date_fields_are_zero_padded() {
        let rules = AllocationRules::default();
        let mut r = record();
        r.date = NaiveDate::from_ymd_opt(2025, 1, 5);
        let line = format_payroll_line(&r, Shift::Day, &rules.payroll);
        assert!(line.contains("|20250105|"));
    }

    #[test]
    fn test_hours_to_minutes() {
        assert_eq!(hours_to_minutes(dec("7.00")), 420);
        assert_eq!(hours_to_minutes(dec("0")), 0);
        assert_eq!(hours_to_minutes(dec("0.01")), 1);
        // 2.53h = 151.8min rounds to nearest minute
        assert_eq!(hours_to_minutes(dec("2.53")), 152);
    }

    #[test]
    fn test_minutes_round_trip_within_one_sixtieth() {
        let hours = dec("3.47");
        let minutes = hours_to_minutes(hours);
        let back = Decimal::new(minutes, 0) / Decimal::new(60, 0);
        assert!((back - hours).abs() <= Decimal::new(1, 0) / Decimal::new(60, 0));
    }
}
