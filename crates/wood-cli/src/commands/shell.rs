//! `woodstore shell`: the interactive store on stdin/stdout.

use anyhow::Result;
use tracing::info;
use wood_shell::{AppShell, Console};

use super::{init_tracing, load_config, warn_unused_keys};

pub fn run_shell(config_paths: Vec<String>) -> Result<()> {
    // Config is loaded before tracing exists, so its filter can be the fallback.
    let (cfg, loaded) = load_config(&config_paths)?;
    init_tracing(&cfg.logging.filter);
    info!(
        config_hash = %loaded.config_hash,
        layers = config_paths.len(),
        "config loaded"
    );
    warn_unused_keys(&loaded)?;

    let mut shell = AppShell::new(cfg);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    console.run(&mut shell)
}
