use wood_ledger::{Field, LedgerError};

use crate::notice::Notice;

/// Operation that needs a selected order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectionAction {
    Edit,
    Delete,
}

impl std::fmt::Display for SelectionAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionAction::Edit => f.write_str("edit"),
            SelectionAction::Delete => f.write_str("delete"),
        }
    }
}

/// Everything a dialog operation can refuse with.
///
/// The `Display` text is the message shown to the operator. None of these
/// are fatal and none leave the ledger partially written.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    /// One or more inputs were left empty.
    #[error("Please enter all dimensions and density.")]
    MissingField { fields: Vec<Field> },

    /// Text that does not parse as a positive, finite number.
    #[error("Invalid input. Please enter valid numbers.")]
    InvalidNumber { field: Field, text: String },

    #[error("Please select an order to {action}.")]
    NoSelection { action: SelectionAction },

    #[error("No order at position {index}; {len} order(s) listed.")]
    SelectionOutOfRange { index: usize, len: usize },

    /// The sell form is one-shot; a new one is needed per sale.
    #[error("This sale has already been recorded. Open a new Sell Wood form.")]
    FormClosed,

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl FormError {
    /// Stable name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FormError::MissingField { .. } => "MissingFieldError",
            FormError::InvalidNumber { .. } => "InvalidNumberError",
            FormError::NoSelection { .. } => "NoSelectionError",
            FormError::SelectionOutOfRange { .. } => "SelectionOutOfRangeError",
            FormError::FormClosed => "FormClosedError",
            FormError::Ledger(_) => "LedgerError",
        }
    }

    pub fn notice(&self) -> Notice {
        Notice::error(self.to_string())
    }
}
