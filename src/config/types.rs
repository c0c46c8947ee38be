//! Configuration types for the allocation rules.
//!
//! This module contains the strongly-typed structures deserialized from the
//! `rules.yaml` configuration document. [`AllocationRules::default`] carries
//! the production literals so the pure core is usable without file I/O.

use serde::Deserialize;

/// Area classification rules.
#[derive(Debug, Clone, Deserialize)]
pub struct AreaRules {
    /// Areas whose hours are kept as-is on the original cost center.
    pub excluded: Vec<String>,
    /// Areas whose hours split into the packing-process and maquila-service
    /// buckets.
    pub production: Vec<String>,
    /// Factor-lookup label for production areas.
    pub production_label: String,
    /// Factor-lookup label for every area outside the excluded and
    /// production sets.
    pub other_label: String,
}

/// Cost-center literal tags used by the decomposition.
#[derive(Debug, Clone, Deserialize)]
pub struct CostCenterTags {
    /// Tag for the packing-process bucket of production hours.
    pub packing_process: String,
    /// Tag for the maquila-service bucket of any split.
    pub maquila_service: String,
    /// Reception cost-center code that triggers its own split rule.
    pub packing_reception: String,
    /// Placeholder code for rows whose source sheet carries no cost center.
    pub missing: String,
}

/// Fixed literal fields of the payroll text line.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollFormat {
    /// Company code, the first field of every line.
    pub company_code: String,
    /// Record-type marker, the third field of every line.
    pub record_type: String,
    /// Shift code for day-shift lines.
    pub day_shift_code: String,
    /// Shift code for night-shift lines.
    pub night_shift_code: String,
}

/// The full allocation-rules document.
#[derive(Debug, Clone, Deserialize)]
pub struct AllocationRules {
    /// Area classification rules.
    pub areas: AreaRules,
    /// Cost-center literal tags.
    pub cost_centers: CostCenterTags,
    /// Payroll line literals.
    pub payroll: PayrollFormat,
}

impl Default for AllocationRules {
    fn default() -> Self {
        Self {
            areas: AreaRules {
                excluded: vec![
                    "OBRAS EN CURSO".to_string(),
                    "GESTION DEL TALENTO HUMANO".to_string(),
                    "SSOMA".to_string(),
                ],
                production: vec![
                    "PRODUCCION".to_string(),
                    "ALMACEN DE PISO PRODUCCION".to_string(),
                ],
                production_label: "PRODUCCION".to_string(),
                other_label: "RECEPCION".to_string(),
            },
            cost_centers: CostCenterTags {
                packing_process: "PROCESO_PACK".to_string(),
                maquila_service: "SERV_MAQUILA".to_string(),
                packing_reception: "RECEP_PACK".to_string(),
                missing: "Sin CECO".to_string(),
            },
            payroll: PayrollFormat {
                company_code: "0002".to_string(),
                record_type: "000004".to_string(),
                day_shift_code: "01".to_string(),
                night_shift_code: "03".to_string(),
            },
        }
    }
}
