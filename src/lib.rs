//! Hours Allocation Engine for Packing/Maquila cost-center distribution.
//!
//! This crate decomposes timesheet rows (hours worked per employee per day)
//! into per-cost-center allocation records according to daily packing/maquila
//! percentage splits, enriches them with roster and activity-code data, and
//! renders fixed-width pipe-delimited payroll lines for downstream ingestion.

#![warn(missing_docs)]

pub mod allocation;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
