//! Hour decomposition engine: the row-level allocation core.
//!
//! For each timesheet row this module decides, from the employee's area and
//! raw cost-center code, whether to keep the hours as-is or split them into
//! two derived cost-center buckets using the externally supplied daily
//! percentages, and emits one or two allocation records accordingly.

use rust_decimal::Decimal;

use crate::config::AllocationRules;
use crate::models::{AllocationRecord, FactorRecord, TimesheetRow};

use super::area::{AreaBucket, classify_area};

/// Rounds an hour value to exactly 2 decimal places.
///
/// Uses banker's rounding (round-half-to-even), matching the behavior the
/// downstream validation sums were built against. The result always carries
/// two fractional digits so rendered hours read "8.00", not "8".
pub fn round_hours(hours: Decimal) -> Decimal {
    let mut rounded = hours.round_dp(2);
    rounded.rescale(2);
    rounded
}

/// Decomposes one timesheet row into one or two allocation records.
///
/// Pure function of its inputs; the caller resolves `factors` for the row's
/// (date, area-bucket) key beforehand, substituting [`FactorRecord::ZERO`]
/// when no entry matches. Zero-factor splits still emit records so
/// downstream validation can tell "present but zero" from "missing".
///
/// Rule precedence, first match wins:
/// 1. Excluded area: one record, original cost center, unsplit hours.
/// 2. Production area: packing-process bucket then maquila-service bucket.
/// 3. Cost center equals the reception tag: reception bucket then
///    maquila-service bucket.
/// 4. Fallback: original cost center then maquila-service bucket.
///
/// Split records are always emitted with the primary bucket first, so output
/// order is deterministic. A blank cost-center value falls back to the
/// configured placeholder before the rules run.
///
/// # Example
///
/// ```
/// use allocation_engine::allocation::decompose;
/// use allocation_engine::config::AllocationRules;
/// use allocation_engine::models::{FactorRecord, TimesheetRow};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let rules = AllocationRules::default();
/// let row = TimesheetRow {
///     employee_id: "44556677".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 6, 2),
///     area: "PRODUCCION".to_string(),
///     cost_center: "PROD_01".to_string(),
///     activity_code: "A120".to_string(),
///     day_hours: Decimal::new(10, 0),
///     night_hours: Decimal::new(2, 0),
///     full_name: String::new(),
/// };
/// let factors = FactorRecord {
///     packing: Decimal::new(7, 1),
///     maquila: Decimal::new(3, 1),
/// };
///
/// let records = decompose(&row, factors, &rules);
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].final_cost_center, "PROCESO_PACK");
/// assert_eq!(records[0].day_hours, Decimal::new(700, 2));
/// assert_eq!(records[1].final_cost_center, "SERV_MAQUILA");
/// assert_eq!(records[1].night_hours, Decimal::new(60, 2));
/// ```
pub fn decompose(
    row: &TimesheetRow,
    factors: FactorRecord,
    rules: &AllocationRules,
) -> Vec<AllocationRecord> {
    let ceco = match row.cost_center.trim() {
        "" => rules.cost_centers.missing.as_str(),
        trimmed => trimmed,
    };

    match classify_area(&row.area, rules) {
        AreaBucket::Excluded => vec![make_record(
            row,
            ceco,
            round_hours(row.day_hours),
            round_hours(row.night_hours),
        )],
        AreaBucket::Production => split(
            row,
            &rules.cost_centers.packing_process,
            &rules.cost_centers.maquila_service,
            factors,
        ),
        AreaBucket::Other => {
            if ceco == rules.cost_centers.packing_reception {
                split(
                    row,
                    &rules.cost_centers.packing_reception,
                    &rules.cost_centers.maquila_service,
                    factors,
                )
            } else {
                split(row, ceco, &rules.cost_centers.maquila_service, factors)
            }
        }
    }
}

/// Emits the two-record split: the primary bucket scaled by the packing
/// fraction, then the maquila bucket scaled by the maquila fraction.
fn split(
    row: &TimesheetRow,
    primary: &str,
    maquila: &str,
    factors: FactorRecord,
) -> Vec<AllocationRecord> {
    vec![
        make_record(
            row,
            primary,
            round_hours(row.day_hours * factors.packing),
            round_hours(row.night_hours * factors.packing),
        ),
        make_record(
            row,
            maquila,
            round_hours(row.day_hours * factors.maquila),
            round_hours(row.night_hours * factors.maquila),
        ),
    ]
}

fn make_record(
    row: &TimesheetRow,
    final_cost_center: &str,
    day_hours: Decimal,
    night_hours: Decimal,
) -> AllocationRecord {
    AllocationRecord {
        employee_id: row.employee_id.trim().to_string(),
        date: row.date,
        area: row.area.clone(),
        cost_center: row.cost_center.clone(),
        activity_code: row.activity_code.clone(),
        full_name: row.full_name.clone(),
        final_cost_center: final_cost_center.to_string(),
        day_hours,
        night_hours,
        hire_date: None,
        labor_description: String::new(),
        activity_id: String::new(),
        labor_code: String::new(),
        txt_day: String::new(),
        txt_night: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn row(area: &str, ceco: &str, day: &str, night: &str) -> TimesheetRow {
        TimesheetRow {
            employee_id: "44556677".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 2),
            area: area.to_string(),
            cost_center: ceco.to_string(),
            activity_code: "A120".to_string(),
            day_hours: dec(day),
            night_hours: dec(night),
            full_name: String::new(),
        }
    }

    fn factors(packing: &str, maquila: &str) -> FactorRecord {
        FactorRecord {
            packing: dec(packing),
            maquila: dec(maquila),
        }
    }

    // ==========================================================================
    // Rule 1: excluded areas keep their hours unsplit
    // ==========================================================================
    #[test]
    fn test_excluded_area_emits_single_unsplit_record() {
        let rules = AllocationRules::default();
        let records = decompose(
            &row("SSOMA", "ADM_03", "8", "0"),
            factors("0.7", "0.3"),
            &rules,
        );

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].final_cost_center, "ADM_03");
        assert_eq!(records[0].day_hours, dec("8.00"));
        assert_eq!(records[0].night_hours, dec("0.00"));
    }

    #[test]
    fn test_excluded_area_ignores_reception_cost_center() {
        // Area precedence beats the cost-center rule.
        let rules = AllocationRules::default();
        let records = decompose(
            &row("OBRAS EN CURSO", "RECEP_PACK", "6", "2"),
            factors("0.5", "0.5"),
            &rules,
        );

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].final_cost_center, "RECEP_PACK");
        assert_eq!(records[0].day_hours, dec("6.00"));
        assert_eq!(records[0].night_hours, dec("2.00"));
    }

    // ==========================================================================
    // Rule 2: production areas split into PROCESO_PACK / SERV_MAQUILA
    // ==========================================================================
    #[test]
    fn test_production_area_splits_by_factors() {
        let rules = AllocationRules::default();
        let records = decompose(
            &row("PRODUCCION", "PROD_01", "10", "2"),
            factors("0.7", "0.3"),
            &rules,
        );

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].final_cost_center, "PROCESO_PACK");
        assert_eq!(records[0].day_hours, dec("7.00"));
        assert_eq!(records[0].night_hours, dec("1.40"));
        assert_eq!(records[1].final_cost_center, "SERV_MAQUILA");
        assert_eq!(records[1].day_hours, dec("3.00"));
        assert_eq!(records[1].night_hours, dec("0.60"));
    }

    #[test]
    fn test_production_floor_warehouse_also_splits() {
        let rules = AllocationRules::default();
        let records = decompose(
            &row("ALMACEN DE PISO PRODUCCION", "PROD_02", "4", "4"),
            factors("0.25", "0.75"),
            &rules,
        );

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].final_cost_center, "PROCESO_PACK");
        assert_eq!(records[0].day_hours, dec("1.00"));
        assert_eq!(records[1].final_cost_center, "SERV_MAQUILA");
        assert_eq!(records[1].day_hours, dec("3.00"));
        assert_eq!(records[1].night_hours, dec("3.00"));
    }

    // ==========================================================================
    // Rule 3: RECEP_PACK cost center outside excluded/production
    // ==========================================================================
    #[test]
    fn test_reception_cost_center_splits_on_its_own_tag() {
        let rules = AllocationRules::default();
        let records = decompose(
            &row("ALMACEN", "RECEP_PACK", "5", "0"),
            factors("0.5", "0.5"),
            &rules,
        );

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].final_cost_center, "RECEP_PACK");
        assert_eq!(records[0].day_hours, dec("2.50"));
        assert_eq!(records[1].final_cost_center, "SERV_MAQUILA");
        assert_eq!(records[1].day_hours, dec("2.50"));
    }

    #[test]
    fn test_reception_cost_center_matches_after_trim() {
        let rules = AllocationRules::default();
        let records = decompose(
            &row("ALMACEN", "  RECEP_PACK  ", "4", "0"),
            factors("0.5", "0.5"),
            &rules,
        );
        assert_eq!(records[0].final_cost_center, "RECEP_PACK");
    }

    // ==========================================================================
    // Rule 4: fallback keeps the original code for the packing share
    // ==========================================================================
    #[test]
    fn test_fallback_splits_on_original_cost_center() {
        let rules = AllocationRules::default();
        let records = decompose(
            &row("MANTENIMIENTO", "MANT_01", "8", "1"),
            factors("0.6", "0.4"),
            &rules,
        );

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].final_cost_center, "MANT_01");
        assert_eq!(records[0].day_hours, dec("4.80"));
        assert_eq!(records[0].night_hours, dec("0.60"));
        assert_eq!(records[1].final_cost_center, "SERV_MAQUILA");
        assert_eq!(records[1].day_hours, dec("3.20"));
        assert_eq!(records[1].night_hours, dec("0.40"));
    }

    #[test]
    fn test_fallback_with_missing_cost_center_placeholder() {
        let rules = AllocationRules::default();
        let records = decompose(
            &row("ALMACEN", "Sin CECO", "8", "0"),
            factors("1", "0"),
            &rules,
        );
        assert_eq!(records[0].final_cost_center, "Sin CECO");
        assert_eq!(records[0].day_hours, dec("8.00"));
        assert_eq!(records[1].day_hours, dec("0.00"));
    }

    #[test]
    fn test_blank_cost_center_falls_back_to_placeholder() {
        let rules = AllocationRules::default();
        let records = decompose(&row("ALMACEN", "  ", "4", "0"), factors("0.5", "0.5"), &rules);
        assert_eq!(records[0].final_cost_center, "Sin CECO");
        assert_eq!(records[1].final_cost_center, "SERV_MAQUILA");
    }

    // ==========================================================================
    // Zero factors: records are emitted, not dropped
    // ==========================================================================
    #[test]
    fn test_zero_factors_still_emit_two_records() {
        let rules = AllocationRules::default();
        let records = decompose(
            &row("PRODUCCION", "PROD_01", "10", "2"),
            FactorRecord::ZERO,
            &rules,
        );

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].day_hours, dec("0.00"));
        assert_eq!(records[0].night_hours, dec("0.00"));
        assert_eq!(records[1].day_hours, dec("0.00"));
        assert_eq!(records[1].night_hours, dec("0.00"));
    }

    // ==========================================================================
    // Rounding
    // ==========================================================================
    #[test]
    fn test_hours_round_to_two_decimals() {
        let rules = AllocationRules::default();
        // 7.333... splits
        let records = decompose(
            &row("PRODUCCION", "PROD_01", "7", "0"),
            factors("0.3333", "0.6667"),
            &rules,
        );
        assert_eq!(records[0].day_hours, dec("2.33"));
        assert_eq!(records[1].day_hours, dec("4.67"));
    }

    #[test]
    fn test_round_hours_is_half_to_even() {
        assert_eq!(round_hours(dec("2.125")), dec("2.12"));
        assert_eq!(round_hours(dec("2.135")), dec("2.14"));
        assert_eq!(round_hours(dec("2.005")), dec("2.00"));
    }

    #[test]
    fn test_records_preserve_source_fields() {
        let rules = AllocationRules::default();
        let records = decompose(
            &row("PRODUCCION", "PROD_01", "10", "2"),
            factors("0.7", "0.3"),
            &rules,
        );
        for record in &records {
            assert_eq!(record.employee_id, "44556677");
            assert_eq!(record.area, "PRODUCCION");
            assert_eq!(record.cost_center, "PROD_01");
            assert_eq!(record.activity_code, "A120");
            assert_eq!(record.date, NaiveDate::from_ymd_opt(2025, 6, 2));
        }
    }

    proptest! {
        // Each child bucket equals source hours times its fraction, and the
        // two children together never drift more than a rounding step from
        // source hours times the fraction sum.
        #[test]
        fn prop_split_is_exact_fractional_partition(
            day_cents in 0i64..=100_000,
            packing_bp in 0i64..=10_000,
            maquila_bp in 0i64..=10_000,
        ) {
            let rules = AllocationRules::default();
            let day = Decimal::new(day_cents, 2);
            let f = FactorRecord {
                packing: Decimal::new(packing_bp, 4),
                maquila: Decimal::new(maquila_bp, 4),
            };
            let source = row("PRODUCCION", "PROD_01", &day.to_string(), "0");

            let records = decompose(&source, f, &rules);
            prop_assert_eq!(records.len(), 2);
            prop_assert_eq!(records[0].day_hours, round_hours(day * f.packing));
            prop_assert_eq!(records[1].day_hours, round_hours(day * f.maquila));

            let child_sum = records[0].day_hours + records[1].day_hours;
            let expected = day * (f.packing + f.maquila);
            let drift = (child_sum - expected).abs();
            prop_assert!(drift <= Decimal::new(1, 2));
        }
    }
}
