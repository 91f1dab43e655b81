//! Sell Wood form.
//!
//! One instance records at most one sale. After a successful `submit` the
//! form is closed and refuses further input; failed submits leave it open.

use wood_ledger::{fmt_money, Ledger, OrderRecord};

use crate::error::FormError;
use crate::input::parse_dimensions;
use crate::notice::Notice;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum FormState {
    Open,
    Closed,
}

/// Outcome of a recorded sale.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SaleReceipt {
    /// Position of the new record in the ledger.
    pub index: usize,
    pub record: OrderRecord,
}

impl SaleReceipt {
    pub fn notice(&self) -> Notice {
        Notice::info(
            "Success",
            format!("The price of wood is ${}.", fmt_money(self.record.price)),
        )
    }
}

pub struct SellForm<'a> {
    ledger: &'a mut Ledger,
    state: FormState,
}

impl<'a> SellForm<'a> {
    pub const TITLE: &'static str = "Sell Wood";

    pub fn new(ledger: &'a mut Ledger) -> Self {
        Self {
            ledger,
            state: FormState::Open,
        }
    }

    pub fn is_open(&self) -> bool {
        self.state == FormState::Open
    }

    /// Validate the three entry boxes, price the sale and append it.
    ///
    /// # Errors
    /// - [`FormError::MissingField`] if any text is empty
    /// - [`FormError::InvalidNumber`] if a text is not a positive number
    /// - [`FormError::FormClosed`] if this form already recorded a sale
    ///
    /// The ledger grows by exactly one on success and is untouched otherwise.
    pub fn submit(
        &mut self,
        density: &str,
        length: &str,
        width: &str,
    ) -> Result<SaleReceipt, FormError> {
        if self.state == FormState::Closed {
            return Err(FormError::FormClosed);
        }

        let dims = parse_dimensions(density, length, width)?;
        let record = OrderRecord::priced(dims);
        let index = self.ledger.append(record)?;

        self.state = FormState::Closed;
        Ok(SaleReceipt { index, record })
    }
}
