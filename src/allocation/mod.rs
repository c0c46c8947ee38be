//! Allocation logic for the Hours Allocation Engine.
//!
//! This module contains the row-level decomposition core and its
//! surrounding stages: area classification, the hour decomposition engine,
//! the roster/labor enrichment joiner, the payroll record formatter, the
//! batch pipeline, and the validation summary view.

mod area;
mod decompose;
mod engine;
mod enrich;
mod format;
mod validation;

pub use area::{AreaBucket, classify_area};
pub use decompose::{decompose, round_hours};
pub use engine::allocate_batch;
pub use enrich::{enrich_records, normalize_activity_id, strip_fraction};
pub use format::{format_payroll_line, hours_to_minutes};
pub use validation::{
    ValidationRow, ValidationStatus, ValidationSummary, ValidationTotals, summarize,
};
