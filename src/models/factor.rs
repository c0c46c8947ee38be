//! Packing/maquila factor records and the (date, area)-keyed lookup table.
//!
//! Factors arrive from an external daily-percentages source, fully
//! materialized. A missing entry is not an error: lookups resolve to
//! [`FactorRecord::ZERO`], which makes the split branches emit zero-hour
//! records downstream so validation can tell "present but zero" from
//! "missing entirely".

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::lenient;

/// The pair of daily percentage fractions for one (date, area) key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorRecord {
    /// Fraction of hours attributed to the packing process.
    pub packing: Decimal,
    /// Fraction of hours attributed to the maquila service.
    pub maquila: Decimal,
}

impl FactorRecord {
    /// The zero record substituted when no factor entry matches.
    pub const ZERO: FactorRecord = FactorRecord {
        packing: Decimal::ZERO,
        maquila: Decimal::ZERO,
    };
}

/// One row of the external factor table, as received over the wire.
///
/// Fractions deserialize leniently; unparseable values coerce to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorRow {
    /// The date this split applies to.
    pub date: NaiveDate,
    /// The area label (e.g. "PRODUCCION", "RECEPCION"). Matched
    /// case-insensitively after trimming.
    pub area: String,
    /// Fraction of hours attributed to the packing process.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub packing: Decimal,
    /// Fraction of hours attributed to the maquila service.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub maquila: Decimal,
}

/// Lookup table of factor records keyed by (date, uppercased area label).
///
/// # Example
///
/// ```
/// use allocation_engine::models::{FactorRow, FactorTable, FactorRecord};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
/// let table = FactorTable::from_rows(vec![FactorRow {
///     date,
///     area: "produccion".to_string(),
///     packing: Decimal::new(7, 1),
///     maquila: Decimal::new(3, 1),
/// }]);
///
/// let hit = table.lookup(Some(date), "PRODUCCION");
/// assert_eq!(hit.packing, Decimal::new(7, 1));
///
/// let miss = table.lookup(Some(date), "RECEPCION");
/// assert_eq!(miss, FactorRecord::ZERO);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FactorTable {
    entries: HashMap<(NaiveDate, String), FactorRecord>,
}

impl FactorTable {
    /// Builds a table from rows. Keys are trimmed and uppercased; when the
    /// same (date, area) key appears more than once the first row wins,
    /// keeping the result independent of map iteration order.
    pub fn from_rows(rows: Vec<FactorRow>) -> Self {
        let mut entries = HashMap::with_capacity(rows.len());
        for row in rows {
            let key = (row.date, row.area.trim().to_uppercase());
            entries.entry(key).or_insert(FactorRecord {
                packing: row.packing,
                maquila: row.maquila,
            });
        }
        Self { entries }
    }

    /// Looks up the factor record for a date and area label.
    ///
    /// Returns [`FactorRecord::ZERO`] when the row has no date or no entry
    /// matches; a missing factor is recoverable by design.
    pub fn lookup(&self, date: Option<NaiveDate>, label: &str) -> FactorRecord {
        let Some(date) = date else {
            return FactorRecord::ZERO;
        };
        self.entries
            .get(&(date, label.trim().to_uppercase()))
            .copied()
            .unwrap_or(FactorRecord::ZERO)
    }

    /// Returns the number of distinct (date, area) keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
