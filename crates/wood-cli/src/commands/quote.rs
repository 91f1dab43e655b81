//! `woodstore quote`: price a board with the Sell Wood validation rules,
//! without touching any ledger.

use anyhow::Result;
use wood_forms::parse_dimensions;
use wood_ledger::fmt_money;

pub fn run_quote(density: &str, length: &str, width: &str) -> Result<()> {
    let dims = parse_dimensions(density, length, width)?;
    println!("price={}", fmt_money(dims.quote()));
    Ok(())
}
