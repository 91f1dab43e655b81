//! wood-shell
//!
//! The application shell owns the session ledger and opens the Sell Wood
//! and View Orders dialogs on it. `console` is the interactive front end:
//! a line-oriented menu where each dialog is a sub-session and each modal
//! message is printed as `[Title] message`.

pub mod console;
mod shell;

pub use console::Console;
pub use shell::{AppShell, Geometry, WindowSpec};
