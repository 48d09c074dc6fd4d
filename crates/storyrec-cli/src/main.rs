//! storyrec
//!
//! Tag-based work recommendations from an archive collection.
//!
//! # Usage
//!
//! ```bash
//! storyrec collection <name> [--json]
//! storyrec recommend <collection> [-n COUNT] [--topics K] [--seed SEED]
//! ```
//!
//! # Configuration
//!
//! Loaded in order (later sources override earlier):
//! 1. Built-in defaults
//! 2. Config file (~/.config/storyrec/config.toml)
//! 3. CLI flags

use anyhow::Result;
use clap::Parser;

use storyrec_cli::commands::RecommendOverrides;
use storyrec_cli::{handle_collection, handle_recommend, init_tracing, load_config, Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Collection { name, json } => {
            handle_collection(&config, &name, json)?;
        }
        Commands::Recommend {
            collection,
            count,
            topics,
            query_tags,
            seed,
            json,
        } => {
            let overrides = RecommendOverrides {
                count,
                topics,
                query_tags,
                seed,
            };
            handle_recommend(&config, &collection, overrides, json)?;
        }
    }

    Ok(())
}
