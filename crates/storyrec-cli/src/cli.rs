//! CLI argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// storyrec
///
/// Tag-based work recommendations from an archive collection.
#[derive(Parser, Debug)]
#[command(name = "storyrec")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides default ~/.config/storyrec/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List a collection's works, sorted by kudos then hits
    Collection {
        /// Collection name
        name: String,

        /// Emit JSON instead of the text listing
        #[arg(long)]
        json: bool,
    },

    /// Recommend works based on a collection's tag signal
    Recommend {
        /// Collection providing the seed works
        collection: String,

        /// Target number of recommendations
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Requested latent topic count
        #[arg(long)]
        topics: Option<usize>,

        /// Number of dominant-topic tags in the initial query
        #[arg(long)]
        query_tags: Option<usize>,

        /// Random seed for the topic factorization
        #[arg(long)]
        seed: Option<u64>,

        /// Emit JSON instead of the text listing
        #[arg(long)]
        json: bool,
    },
}
