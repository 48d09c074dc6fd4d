//! Topic discovery error types.

use thiserror::Error;

/// Errors that can occur while building tag features or fitting topics.
#[derive(Debug, Error)]
pub enum TopicsError {
    /// No usable tag signal: empty seed set, or every seed has no tags
    #[error("Empty tag corpus: no work in the seed set carries any tags")]
    EmptyCorpus,

    /// Invalid topic count or degenerate feature matrix
    #[error("Model fit error: {0}")]
    ModelFit(String),
}
