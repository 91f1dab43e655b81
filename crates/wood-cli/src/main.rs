use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "woodstore")]
#[command(about = "Wood Store: record and review wood sales", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive store (default when no command is given)
    Shell {
        /// Layered config paths in merge order (base -> site -> local)
        #[arg(long = "config")]
        config_paths: Vec<String>,
    },

    /// Price a sale without recording it
    Quote {
        /// Wood density in kg/m^3
        #[arg(long, allow_hyphen_values = true)]
        density: String,

        /// Length in metres
        #[arg(long, allow_hyphen_values = true)]
        length: String,

        /// Width in metres
        #[arg(long, allow_hyphen_values = true)]
        width: String,
    },

    /// Compute layered config hash + print canonical JSON
    ConfigHash {
        /// Paths in merge order
        #[arg(required = true)]
        paths: Vec<String>,
    },
}

fn main() -> Result<()> {
    // Load .env.local if present (dev convenience); silent when absent.
    let _ = dotenvy::from_filename(".env.local");

    let cli = Cli::parse();

    match cli.cmd {
        None => commands::shell::run_shell(Vec::new()),
        Some(Commands::Shell { config_paths }) => commands::shell::run_shell(config_paths),
        Some(Commands::Quote {
            density,
            length,
            width,
        }) => {
            commands::init_tracing("warn");
            commands::quote::run_quote(&density, &length, &width)
        }
        Some(Commands::ConfigHash { paths }) => {
            commands::init_tracing("warn");
            commands::run_config_hash(paths)
        }
    }
}
