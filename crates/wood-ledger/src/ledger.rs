//! In-memory order ledger with invariant enforcement on every write.
//!
//! # Purpose
//! The ledger is the single source of truth for the session's sales. It is
//! owned by the application shell and lent to one dialog at a time.
//!
//! - Records keep insertion order; duplicates are allowed.
//! - Records have no identity beyond their position.
//! - Writes (`append`, `update_dimensions`, `remove`) either fully succeed or
//!   leave the ledger untouched.
//! - `update_dimensions` never touches the stored price.
//!
//! # Usage
//! ```ignore
//! let mut ledger = Ledger::new();
//! let idx = ledger.append(OrderRecord::priced(Dimensions::new(600.0, 2.0, 1.5)))?;
//! assert_eq!(ledger.get(idx).unwrap().price, 18_000.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::types::{Dimensions, Field, OrderRecord};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// All invariant violations that `Ledger` can surface.
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerError {
    /// Every measurement must be strictly positive.
    NonPositive { field: Field, value: f64 },
    /// Every measurement must be a finite number (no NaN / infinity).
    NonFinite { field: Field },
    /// Position does not address a record.
    IndexOutOfRange { index: usize, len: usize },
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositive { field, value } => {
                write!(f, "ledger invariant: {field} must be > 0, got {value}")
            }
            Self::NonFinite { field } => {
                write!(f, "ledger invariant: {field} must be finite")
            }
            Self::IndexOutOfRange { index, len } => write!(
                f,
                "ledger index {index} out of range (ledger holds {len} order(s))"
            ),
        }
    }
}

impl std::error::Error for LedgerError {}

// ---------------------------------------------------------------------------
// Snapshot (read-only view)
// ---------------------------------------------------------------------------

/// A point-in-time copy of the ledger, suitable for printing as JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub orders: Vec<OrderRecord>,
    /// Sum of stored prices (as recorded, not recomputed).
    pub total_price: f64,
}

impl LedgerSnapshot {
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Ledger
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ledger {
    records: Vec<OrderRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Write surface
    // -----------------------------------------------------------------------

    /// Append a record at the end and return its position.
    ///
    /// # Errors
    /// Returns [`LedgerError`] if a measurement is non-positive or
    /// non-finite. The ledger is **not** mutated on error.
    pub fn append(&mut self, record: OrderRecord) -> Result<usize, LedgerError> {
        Self::validate_dimensions(&record.dimensions())?;
        self.records.push(record);
        Ok(self.records.len() - 1)
    }

    /// Overwrite the measurements of the record at `index`.
    ///
    /// The stored price is kept as-is, even though it no longer matches the
    /// new measurements.
    pub fn update_dimensions(
        &mut self,
        index: usize,
        dims: Dimensions,
    ) -> Result<&OrderRecord, LedgerError> {
        self.check_index(index)?;
        Self::validate_dimensions(&dims)?;
        let rec = &mut self.records[index];
        rec.density = dims.density;
        rec.length = dims.length;
        rec.width = dims.width;
        Ok(&self.records[index])
    }

    /// Remove and return the record at `index`; later records shift down by one.
    pub fn remove(&mut self, index: usize) -> Result<OrderRecord, LedgerError> {
        self.check_index(index)?;
        Ok(self.records.remove(index))
    }

    // -----------------------------------------------------------------------
    // Read surface
    // -----------------------------------------------------------------------

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&OrderRecord> {
        self.records.get(index)
    }

    pub fn last(&self) -> Option<&OrderRecord> {
        self.records.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OrderRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[OrderRecord] {
        &self.records
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            orders: self.records.clone(),
            total_price: self.records.iter().map(|r| r.price).sum(),
        }
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    fn check_index(&self, index: usize) -> Result<(), LedgerError> {
        if index >= self.records.len() {
            return Err(LedgerError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        Ok(())
    }

    fn validate_dimensions(dims: &Dimensions) -> Result<(), LedgerError> {
        for field in Field::ALL {
            let value = dims.get(field);
            if !value.is_finite() {
                return Err(LedgerError::NonFinite { field });
            }
            if value <= 0.0 {
                return Err(LedgerError::NonPositive { field, value });
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a OrderRecord;
    type IntoIter = std::slice::Iter<'a, OrderRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
