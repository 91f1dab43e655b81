//! wood-ledger
//!
//! Order records, the pricing formula and the in-memory order ledger.
//! - A sale is priced once, at creation time
//! - Records are addressed by position only (no ids)
//! - Pure deterministic logic (no IO, no time)

mod pricing;
mod types;

pub mod ledger;

pub use ledger::{Ledger, LedgerError, LedgerSnapshot};
pub use pricing::{price, volume, PRICE_PER_KG_FACTOR};
pub use types::{fmt_dimension, fmt_money, Dimensions, Field, OrderRecord};
