//! View Orders dialog.
//!
//! # State diagram
//!
//! ```text
//!   new()          select(i)             begin_edit()
//!   ─────► NoSelection ─────► Selected ─────────────► EditPopulated
//!               ▲                ▲  ◄──── save_edit() ───────┘
//!               │                │  ◄──── select(j) ─────────┘
//!               └──── delete() ──┴───────────────────────────┘
//! ```
//!
//! The viewer borrows the ledger mutably for its whole lifetime, so a held
//! selection always addresses an existing record. Dropping the viewer
//! discards the selection and edit slots; the ledger keeps every change
//! already made.

use wood_ledger::{fmt_dimension, Dimensions, Field, Ledger, OrderRecord};

use crate::error::{FormError, SelectionAction};
use crate::input::parse_dimensions;
use crate::notice::Notice;

// ---------------------------------------------------------------------------
// ViewerState
// ---------------------------------------------------------------------------

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ViewerState {
    NoSelection,
    Selected { index: usize },
    /// Selected, and the edit slots were filled from that record.
    EditPopulated { index: usize },
}

// ---------------------------------------------------------------------------
// EditSlots
// ---------------------------------------------------------------------------

/// Text of the three edit entry boxes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditSlots {
    density: String,
    length: String,
    width: String,
}

impl EditSlots {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Density => &self.density,
            Field::Length => &self.length,
            Field::Width => &self.width,
        }
    }

    pub fn set(&mut self, field: Field, text: impl Into<String>) {
        let text = text.into();
        match field {
            Field::Density => self.density = text,
            Field::Length => self.length = text,
            Field::Width => self.width = text,
        }
    }

    fn fill_from(&mut self, record: &OrderRecord) {
        self.density = fmt_dimension(record.density);
        self.length = fmt_dimension(record.length);
        self.width = fmt_dimension(record.width);
    }

    fn parse(&self) -> Result<Dimensions, FormError> {
        parse_dimensions(&self.density, &self.length, &self.width)
    }
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SavedEdit {
    pub index: usize,
    /// Record after the edit. `price` is the one stored at sale time.
    pub record: OrderRecord,
}

impl SavedEdit {
    pub fn notice(&self) -> Notice {
        Notice::info("Success", "Changes saved successfully.")
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DeletedOrder {
    pub index: usize,
    pub record: OrderRecord,
}

impl DeletedOrder {
    pub fn notice(&self) -> Notice {
        Notice::info("Delete Order", "Order deleted successfully.")
    }
}

// ---------------------------------------------------------------------------
// OrderViewer
// ---------------------------------------------------------------------------

pub struct OrderViewer<'a> {
    ledger: &'a mut Ledger,
    selection: Option<usize>,
    populated: bool,
    slots: EditSlots,
}

impl<'a> OrderViewer<'a> {
    pub const TITLE: &'static str = "View Orders";
    pub const HEADING: &'static str = "Today's Orders:";

    pub fn new(ledger: &'a mut Ledger) -> Self {
        Self {
            ledger,
            selection: None,
            populated: false,
            slots: EditSlots::default(),
        }
    }

    // -----------------------------------------------------------------------
    // Read surface
    // -----------------------------------------------------------------------

    /// Rendered rows in ledger order. Re-reads the ledger on every call.
    pub fn list(&self) -> impl Iterator<Item = String> + '_ {
        self.ledger.iter().map(|r| r.to_string())
    }

    pub fn len(&self) -> usize {
        self.ledger.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty()
    }

    pub fn ledger(&self) -> &Ledger {
        &*self.ledger
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn state(&self) -> ViewerState {
        match (self.selection, self.populated) {
            (None, _) => ViewerState::NoSelection,
            (Some(index), false) => ViewerState::Selected { index },
            (Some(index), true) => ViewerState::EditPopulated { index },
        }
    }

    pub fn slots(&self) -> &EditSlots {
        &self.slots
    }

    // -----------------------------------------------------------------------
    // Selection
    // -----------------------------------------------------------------------

    /// Select the order at `index`. Out-of-range leaves the selection as it was.
    pub fn select(&mut self, index: usize) -> Result<(), FormError> {
        if index >= self.ledger.len() {
            return Err(FormError::SelectionOutOfRange {
                index,
                len: self.ledger.len(),
            });
        }
        self.selection = Some(index);
        self.populated = false;
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
        self.populated = false;
    }

    fn require_selection(&self, action: SelectionAction) -> Result<usize, FormError> {
        self.selection.ok_or(FormError::NoSelection { action })
    }

    // -----------------------------------------------------------------------
    // Edit
    // -----------------------------------------------------------------------

    /// Copy the selected record's measurements into the edit slots.
    pub fn begin_edit(&mut self) -> Result<&EditSlots, FormError> {
        let index = self.require_selection(SelectionAction::Edit)?;
        let record = *self
            .ledger
            .get(index)
            .ok_or(FormError::SelectionOutOfRange {
                index,
                len: self.ledger.len(),
            })?;
        self.slots.fill_from(&record);
        self.populated = true;
        Ok(&self.slots)
    }

    pub fn set_slot(&mut self, field: Field, text: impl Into<String>) {
        self.slots.set(field, text);
    }

    /// Write the edit slots back to the selected record.
    ///
    /// Measurements are replaced in place; the stored price is **not**
    /// recomputed. Slot text goes through the same validation as the sell
    /// form, and nothing is written unless all three slots parse.
    pub fn save_edit(&mut self) -> Result<SavedEdit, FormError> {
        let index = self.require_selection(SelectionAction::Edit)?;
        let dims = self.slots.parse()?;
        let record = *self.ledger.update_dimensions(index, dims)?;
        self.populated = false;
        Ok(SavedEdit { index, record })
    }

    // -----------------------------------------------------------------------
    // Delete / cancel
    // -----------------------------------------------------------------------

    /// Remove the selected record. Later rows move up by one and the
    /// selection is cleared.
    pub fn delete(&mut self) -> Result<DeletedOrder, FormError> {
        let index = self.require_selection(SelectionAction::Delete)?;
        let record = self.ledger.remove(index)?;
        self.clear_selection();
        Ok(DeletedOrder { index, record })
    }

    /// Acknowledge the Cancel Order button. Changes nothing.
    pub fn cancel(&self) -> Notice {
        Notice::info("Cancel Order", "You clicked the Cancel Order button!")
    }

    /// Row text for the record at `index`, if any.
    pub fn row(&self, index: usize) -> Option<String> {
        self.ledger.get(index).map(|r| r.to_string())
    }
}
