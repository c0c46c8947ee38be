//! Area classification logic.
//!
//! Maps a raw area name onto one of three coarse buckets that select both
//! the factor-lookup key and the decomposition branch for a row. The two
//! uses share the bucket values but are evaluated independently, since the
//! decomposition also inspects the row's raw cost-center code.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AllocationRules;

/// Coarse area bucket used by the decomposition engine.
///
/// # Example
///
/// ```
/// use allocation_engine::allocation::{classify_area, AreaBucket};
/// use allocation_engine::config::AllocationRules;
///
/// let rules = AllocationRules::default();
/// assert_eq!(classify_area("ssoma", &rules), AreaBucket::Excluded);
/// assert_eq!(classify_area(" PRODUCCION ", &rules), AreaBucket::Production);
/// assert_eq!(classify_area("ALMACEN", &rules), AreaBucket::Other);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaBucket {
    /// Hours stay on the original cost center, unsplit.
    Excluded,
    /// Hours split into packing-process and maquila-service buckets.
    Production,
    /// Everything else; factors resolve under the reception label.
    Other,
}

impl AreaBucket {
    /// Returns the factor-table lookup label for this bucket, or `None`
    /// for excluded areas, which never consult the factor table.
    pub fn factor_label<'a>(&self, rules: &'a AllocationRules) -> Option<&'a str> {
        match self {
            AreaBucket::Excluded => None,
            AreaBucket::Production => Some(&rules.areas.production_label),
            AreaBucket::Other => Some(&rules.areas.other_label),
        }
    }
}

impl std::fmt::Display for AreaBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AreaBucket::Excluded => write!(f, "Excluded"),
            AreaBucket::Production => write!(f, "Production"),
            AreaBucket::Other => write!(f, "Other"),
        }
    }
}

/// Classifies a raw area name into its [`AreaBucket`].
///
/// The name is trimmed and uppercased before comparison against the
/// configured sets. Unrecognized names silently classify as
/// [`AreaBucket::Other`]; a debug breadcrumb is emitted so data-entry
/// drift stays visible without changing batch semantics.
pub fn classify_area(raw: &str, rules: &AllocationRules) -> AreaBucket {
    let normalized = raw.trim().to_uppercase();

    if rules
        .areas
        .excluded
        .iter()
        .any(|a| a.trim().to_uppercase() == normalized)
    {
        return AreaBucket::Excluded;
    }
    if rules
        .areas
        .production
        .iter()
        .any(|a| a.trim().to_uppercase() == normalized)
    {
        return AreaBucket::Production;
    }

    debug!(area = %normalized, "area not in excluded/production sets, bucketing as Other");
    AreaBucket::Other
}
