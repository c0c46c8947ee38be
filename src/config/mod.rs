//! Configuration loading and management for the Hours Allocation Engine.
//!
//! This module provides functionality to load the allocation-rules document
//! from YAML, covering area classification sets, cost-center literal tags,
//! and the fixed fields of the payroll text line.
//!
//! # Example
//!
//! ```no_run
//! use allocation_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/zupra").unwrap();
//! println!("Maquila tag: {}", config.rules().cost_centers.maquila_service);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AllocationRules, AreaRules, CostCenterTags, PayrollFormat};
