//! Collaborator traits consumed by the engine.

use thiserror::Error;

use storyrec_types::WorkRecord;

/// Errors from the external search backend.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure
    #[error("HTTP error: {0}")]
    Http(String),

    /// Backend answered with a non-success status
    #[error("Unexpected status code: {0}")]
    Status(u16),

    /// A CSS selector failed to compile
    #[error("Selector error: {0}")]
    Selector(String),
}

/// Issues one search against the backing endpoint.
///
/// Tags arrive in the engine's ranked order; implementations must keep
/// that order when encoding the query, since some backends are
/// order-sensitive for relevance scoring. Rate limiting, retries, and
/// timeouts are the implementation's concern, not the engine's.
pub trait SearchFetcher {
    /// Raw result item produced by one search, consumed by a matching
    /// [`WorkParser`].
    type Item;

    /// Run one search for works carrying all of `tags`.
    fn search(&mut self, tags: &[String]) -> Result<Vec<Self::Item>, FetchError>;
}

impl<F: SearchFetcher> SearchFetcher for &mut F {
    type Item = F::Item;

    fn search(&mut self, tags: &[String]) -> Result<Vec<Self::Item>, FetchError> {
        (**self).search(tags)
    }
}

/// Parses one raw result item into a work record.
pub trait WorkParser<Item> {
    /// Extract a record, or `None` for a malformed item lacking a
    /// locator. `None` means "skip", never an error: a partially
    /// malformed results page must not abort the run.
    fn parse(&self, item: &Item) -> Option<WorkRecord>;
}
