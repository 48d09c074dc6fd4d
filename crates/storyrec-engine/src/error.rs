//! Engine error types.

use thiserror::Error;

use storyrec_topics::TopicsError;

/// Errors that abort a recommendation run.
///
/// Fetch failures are not represented here: the relaxation loop recovers
/// from them locally and returns partial results instead of propagating.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Topic discovery failed (empty corpus or degenerate model fit)
    #[error("Topic discovery error: {0}")]
    Topics(#[from] TopicsError),
}
