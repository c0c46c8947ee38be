//! Request types for the Hours Allocation Engine API.
//!
//! This module defines the JSON request structure for the `/allocate`
//! endpoint. All four input tables arrive fully materialized; upstream
//! collaborators own spreadsheet parsing and column normalization, so the
//! payload already carries the canonical field names.

use serde::{Deserialize, Serialize};

use crate::models::{FactorRow, LaborEntry, RosterEntry, TimesheetRow};

/// Request body for the `/allocate` endpoint.
///
/// The roster, factor, and labor tables may be empty; missing lookups
/// degrade to blank fields and zero-hour splits rather than errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationRequest {
    /// The normalized timesheet rows, in source order.
    pub timesheet: Vec<TimesheetRow>,
    /// The daily packing/maquila percentage table.
    #[serde(default)]
    pub factors: Vec<FactorRow>,
    /// The employee roster.
    #[serde(default)]
    pub roster: Vec<RosterEntry>,
    /// The activity-code lookup table.
    #[serde(default)]
    pub labor_codes: Vec<LaborEntry>,
}
