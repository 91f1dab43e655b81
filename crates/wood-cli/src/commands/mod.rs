//! Command handler modules for the `woodstore` binary.
//!
//! Shared utilities used by multiple command paths live here.

pub mod quote;
pub mod shell;

use anyhow::Result;
use wood_config::{report_unused_keys, AppConfig, LoadedConfig, UnusedKeyPolicy};

/// Install the stderr subscriber. `RUST_LOG` wins over `fallback`.
pub fn init_tracing(fallback: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Load layered config (defaults when `paths` is empty) and validate it.
pub fn load_config(paths: &[String]) -> Result<(AppConfig, LoadedConfig)> {
    let path_refs: Vec<&str> = paths.iter().map(|s| s.as_str()).collect();
    let loaded = wood_config::load_layered_yaml(&path_refs)?;
    let cfg = AppConfig::from_loaded(&loaded)?;
    Ok((cfg, loaded))
}

/// Log every config leaf nothing reads.
pub fn warn_unused_keys(loaded: &LoadedConfig) -> Result<()> {
    let report = report_unused_keys(&loaded.config_json, UnusedKeyPolicy::Warn)?;
    for p in report.unused_leaf_pointers.iter().take(50) {
        tracing::warn!(pointer = %p, "CONFIG_UNUSED_KEY");
    }
    Ok(())
}

pub fn run_config_hash(paths: Vec<String>) -> Result<()> {
    let path_refs: Vec<&str> = paths.iter().map(|s| s.as_str()).collect();
    let loaded = wood_config::load_layered_yaml(&path_refs)?;
    println!("config_hash={}", loaded.config_hash);
    println!("{}", loaded.canonical_json);
    Ok(())
}
