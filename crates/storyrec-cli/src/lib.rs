//! # storyrec-cli
//!
//! Command-line surface for storyrec: crawl a collection's works or run
//! the tag-topic recommendation engine against it.

pub mod cli;
pub mod commands;
pub mod config;

pub use cli::{Cli, Commands};
pub use commands::{handle_collection, handle_recommend};
pub use config::{load_config, FileConfig};

use tracing_subscriber::EnvFilter;

/// Initialize tracing. The `--log-level` flag wins over `RUST_LOG`;
/// neither set means `info`.
pub fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
