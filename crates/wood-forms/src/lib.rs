//! wood-forms
//!
//! The two dialogs that operate on a borrowed [`Ledger`](wood_ledger::Ledger):
//! - `SellForm`: validate three text inputs, price the sale, append it
//! - `OrderViewer`: list, select, edit in place, delete
//!
//! Dialogs never print or block. Every operation returns either a value the
//! front end can render as a [`Notice`] or a [`FormError`].

mod error;
mod input;
mod notice;

pub mod sell;
pub mod viewer;

pub use error::{FormError, SelectionAction};
pub use input::{parse_dimensions, parse_number};
pub use notice::{Notice, NoticeLevel};
pub use sell::{SaleReceipt, SellForm};
pub use viewer::{DeletedOrder, EditSlots, OrderViewer, SavedEdit, ViewerState};
