//! Line-oriented front end.
//!
//! Main menu:
//!
//! ```text
//! 1 | sell        open the Sell Wood form
//! 2 | view        open the View Orders dialog
//! snapshot        print the ledger as JSON
//! help            list commands
//! q | quit        leave (end of input does the same)
//! ```
//!
//! The sell form prompts for each field in turn; `:close` at any prompt
//! abandons the form. The viewer takes one command per line, see
//! [`VIEWER_HELP`].

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};
use wood_forms::{FormError, Notice, OrderViewer, SellForm};
use wood_ledger::{Field, LedgerSnapshot};

use crate::shell::AppShell;

pub const MAIN_HELP: &str = "\
Actions:
  1 | sell      Sell Wood
  2 | view      View Orders
  snapshot      print the ledger as JSON
  help          show this list
  q | quit      exit";

pub const VIEWER_HELP: &str = "\
Viewer commands:
  list                      show all orders
  select <n>                select order n
  edit                      copy the selected order into the edit fields
  density|length|width <v>  type into an edit field
  save                      save the edit fields to the selected order
  delete                    delete the selected order
  cancel                    Cancel Order
  snapshot                  print the ledger as JSON
  close                     close this window";

const CLOSE_FORM: &str = ":close";

pub struct Console<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Run the main menu until `quit` or end of input.
    pub fn run(&mut self, shell: &mut AppShell) -> Result<()> {
        let main = shell.main_window();
        writeln!(self.out, "{} ({})", main.title, main.geometry)?;
        writeln!(self.out, "{MAIN_HELP}")?;

        loop {
            let Some(line) = self.prompt("> ")? else {
                break;
            };
            match line.trim() {
                "" => continue,
                "1" | "sell" => self.sell_dialog(shell)?,
                "2" | "view" => self.viewer_dialog(shell)?,
                "snapshot" => self.print_snapshot(&shell.ledger().snapshot())?,
                "help" | "h" | "?" => writeln!(self.out, "{MAIN_HELP}")?,
                "q" | "quit" | "exit" => break,
                other => writeln!(self.out, "Unknown command: {other} (try `help`)")?,
            }
        }

        info!(orders = shell.ledger().len(), "session ended");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Sell Wood
    // -----------------------------------------------------------------------

    fn sell_dialog(&mut self, shell: &mut AppShell) -> Result<()> {
        writeln!(self.out, "== {} ==", SellForm::TITLE)?;
        let mut form = shell.sell_wood();

        while form.is_open() {
            let mut texts: Vec<String> = Vec::with_capacity(Field::ALL.len());
            for field in Field::ALL {
                match self.prompt(&format!("{} ", field.label()))? {
                    Some(t) if t.trim() == CLOSE_FORM => {
                        debug!("sell form closed without a sale");
                        return Ok(());
                    }
                    Some(t) => texts.push(t),
                    None => return Ok(()),
                }
            }

            match form.submit(&texts[0], &texts[1], &texts[2]) {
                Ok(receipt) => {
                    info!(
                        index = receipt.index,
                        density = receipt.record.density,
                        length = receipt.record.length,
                        width = receipt.record.width,
                        price = receipt.record.price,
                        "sale recorded"
                    );
                    self.notice(&receipt.notice())?;
                }
                Err(e) => self.rejected("sell", &e)?,
            }
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // View Orders
    // -----------------------------------------------------------------------

    fn viewer_dialog(&mut self, shell: &mut AppShell) -> Result<()> {
        let geometry = shell.viewer_geometry();
        let mut viewer = shell.view_orders();
        writeln!(self.out, "== {} ({}) ==", OrderViewer::TITLE, geometry)?;
        self.render_list(&viewer)?;

        loop {
            let Some(line) = self.prompt("view> ")? else {
                return Ok(());
            };
            let line = line.trim();
            let (cmd, arg) = match line.split_once(char::is_whitespace) {
                Some((c, a)) => (c, a.trim()),
                None => (line, ""),
            };

            match cmd {
                "" => continue,
                "list" => self.render_list(&viewer)?,
                "select" => match arg.parse::<usize>() {
                    Ok(index) => match viewer.select(index) {
                        Ok(()) => {
                            let row = viewer.row(index).unwrap_or_default();
                            writeln!(self.out, "Selected [{index}] {row}")?;
                        }
                        Err(e) => self.rejected("select", &e)?,
                    },
                    Err(_) => writeln!(self.out, "Usage: select <position>")?,
                },
                "edit" => match viewer.begin_edit() {
                    Ok(slots) => {
                        let lines: Vec<String> = Field::ALL
                            .iter()
                            .map(|f| format!("  {} {}", f.label(), slots.get(*f)))
                            .collect();
                        for l in lines {
                            writeln!(self.out, "{l}")?;
                        }
                    }
                    Err(e) => self.rejected("edit", &e)?,
                },
                "density" | "length" | "width" => {
                    if let Some(field) = Field::parse(cmd) {
                        viewer.set_slot(field, arg);
                        writeln!(self.out, "  {} {}", field.label(), arg)?;
                    }
                }
                "save" => match viewer.save_edit() {
                    Ok(saved) => {
                        info!(
                            index = saved.index,
                            density = saved.record.density,
                            length = saved.record.length,
                            width = saved.record.width,
                            price = saved.record.price,
                            "order updated"
                        );
                        self.notice(&saved.notice())?;
                    }
                    Err(e) => self.rejected("save", &e)?,
                },
                "delete" => match viewer.delete() {
                    Ok(deleted) => {
                        info!(index = deleted.index, price = deleted.record.price, "order deleted");
                        self.notice(&deleted.notice())?;
                        self.render_list(&viewer)?;
                    }
                    Err(e) => self.rejected("delete", &e)?,
                },
                "cancel" => {
                    let n = viewer.cancel();
                    self.notice(&n)?;
                }
                "snapshot" => self.print_snapshot(&viewer.ledger().snapshot())?,
                "help" | "h" | "?" => writeln!(self.out, "{VIEWER_HELP}")?,
                "close" | "q" => {
                    debug!("order viewer closed");
                    return Ok(());
                }
                other => writeln!(self.out, "Unknown command: {other} (try `help`)")?,
            }
        }
    }

    fn render_list(&mut self, viewer: &OrderViewer<'_>) -> Result<()> {
        writeln!(self.out, "{}", OrderViewer::HEADING)?;
        if viewer.is_empty() {
            writeln!(self.out, "  (no orders)")?;
        }
        for (i, row) in viewer.list().enumerate() {
            writeln!(self.out, "  [{i}] {row}")?;
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    /// Print `text` and read one line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.out, "{text}")?;
        self.out.flush()?;

        let mut buf = String::new();
        let n = self
            .input
            .read_line(&mut buf)
            .context("failed to read console input")?;
        if n == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        let line = buf.trim_end_matches(['\n', '\r']).to_string();
        Ok(Some(line))
    }

    fn notice(&mut self, notice: &Notice) -> Result<()> {
        writeln!(self.out, "{notice}")?;
        Ok(())
    }

    fn rejected(&mut self, op: &str, err: &FormError) -> Result<()> {
        warn!(op, kind = err.kind(), error = %err, "operation rejected");
        self.notice(&err.notice())
    }

    fn print_snapshot(&mut self, snapshot: &LedgerSnapshot) -> Result<()> {
        let json =
            serde_json::to_string_pretty(snapshot).context("ledger snapshot serialize failed")?;
        writeln!(self.out, "{json}")?;
        Ok(())
    }
}
