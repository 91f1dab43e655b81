//! Fixtures and scripted console sessions for scenario tests.

use anyhow::{Context, Result};
use wood_config::AppConfig;
use wood_ledger::{Dimensions, Ledger, OrderRecord};
use wood_shell::{AppShell, Console};

/// A priced record.
pub fn record(density: f64, length: f64, width: f64) -> OrderRecord {
    OrderRecord::priced(Dimensions::new(density, length, width))
}

/// A ledger holding one priced record per `(density, length, width)` row.
pub fn ledger_of(rows: &[(f64, f64, f64)]) -> Ledger {
    let mut ledger = Ledger::new();
    for &(d, l, w) in rows {
        ledger
            .append(record(d, l, w))
            .expect("fixture rows must be positive and finite");
    }
    ledger
}

/// What a scripted session left behind.
pub struct Transcript {
    pub output: String,
    pub ledger: Ledger,
}

impl Transcript {
    /// Every `[Title] message` line, in order.
    pub fn notices(&self) -> Vec<&str> {
        self.output
            .lines()
            .map(strip_prompts)
            .filter(|l| l.starts_with('['))
            .collect()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.output.contains(needle)
    }
}

/// Feed `lines` to a console on a fresh shell seeded with `ledger`.
pub fn run_script_on(ledger: Ledger, lines: &[&str]) -> Result<Transcript> {
    let mut script = lines.join("\n");
    script.push('\n');

    let mut shell = AppShell::with_ledger(AppConfig::default(), ledger);
    let mut console = Console::new(script.as_bytes(), Vec::new());
    console.run(&mut shell)?;

    let output = String::from_utf8(console.into_output()).context("console wrote non-UTF-8")?;
    Ok(Transcript {
        output,
        ledger: shell.into_ledger(),
    })
}

/// Feed `lines` to a console on a fresh, empty shell.
pub fn run_script(lines: &[&str]) -> Result<Transcript> {
    run_script_on(Ledger::new(), lines)
}

// Prompts share a line with whatever the console printed after the input.
fn strip_prompts(line: &str) -> &str {
    let mut l = line;
    loop {
        let before = l;
        for p in ["view> ", "> "] {
            if let Some(rest) = l.strip_prefix(p) {
                l = rest;
            }
        }
        for field in wood_ledger::Field::ALL {
            if let Some(rest) = l.strip_prefix(field.label()) {
                l = rest.trim_start();
            }
        }
        if l == before {
            return l;
        }
    }
}
