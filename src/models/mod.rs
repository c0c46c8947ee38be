//! Core data models for the Hours Allocation Engine.
//!
//! This module contains all the domain models used throughout the engine:
//! the canonical timesheet row, the packing/maquila factor table, the roster
//! and activity-code lookup tables, and the allocation record the core emits.

mod allocation;
mod factor;
mod labor;
pub(crate) mod lenient;
mod roster;
mod timesheet;

pub use allocation::{AllocationRecord, Shift};
pub use factor::{FactorRecord, FactorRow, FactorTable};
pub use labor::{LaborEntry, LaborTable};
pub use roster::{RosterEntry, RosterTable};
pub use timesheet::TimesheetRow;
