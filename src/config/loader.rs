//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! allocation-rules document from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::AllocationRules;

/// Loads and provides access to the allocation rules.
///
/// # Directory Structure
///
/// The configuration directory holds a single document:
/// ```text
/// config/zupra/
/// └── rules.yaml   # area sets, cost-center tags, payroll literals
/// ```
///
/// # Example
///
/// ```no_run
/// use allocation_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/zupra").unwrap();
/// assert_eq!(loader.rules().cost_centers.maquila_service, "SERV_MAQUILA");
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rules: AllocationRules,
}

impl ConfigLoader {
    /// Loads the rules from the specified directory.
    ///
    /// Returns an error if `rules.yaml` is missing, does not parse, or
    /// fails validation (empty area sets, blank cost-center tags).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let rules_path = path.as_ref().join("rules.yaml");
        let rules = Self::load_yaml::<AllocationRules>(&rules_path)?;
        Self::validate(&rules)?;
        Ok(Self { rules })
    }

    /// Wraps an in-memory rules document, validating it first.
    pub fn from_rules(rules: AllocationRules) -> EngineResult<Self> {
        Self::validate(&rules)?;
        Ok(Self { rules })
    }

    /// Returns the loaded allocation rules.
    pub fn rules(&self) -> &AllocationRules {
        &self.rules
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Rejects rule documents that would make the decomposition degenerate.
    fn validate(rules: &AllocationRules) -> EngineResult<()> {
        if rules.areas.excluded.is_empty() {
            return Err(EngineError::InvalidRules {
                message: "areas.excluded must not be empty".to_string(),
            });
        }
        if rules.areas.production.is_empty() {
            return Err(EngineError::InvalidRules {
                message: "areas.production must not be empty".to_string(),
            });
        }
        if rules.areas.other_label.trim().is_empty() {
            return Err(EngineError::InvalidRules {
                message: "areas.other_label must not be blank".to_string(),
            });
        }
        for (name, value) in [
            ("cost_centers.packing_process", &rules.cost_centers.packing_process),
            ("cost_centers.maquila_service", &rules.cost_centers.maquila_service),
            ("cost_centers.packing_reception", &rules.cost_centers.packing_reception),
        ] {
            if value.trim().is_empty() {
                return Err(EngineError::InvalidRules {
                    message: format!("{name} must not be blank"),
                });
            }
        }
        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            rules: AllocationRules::default(),
        }
    }
}
