//! Work records.

use serde::{Deserialize, Serialize};

/// Author value used when a work has no attributed author.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

/// One recommendable work, as extracted from a single listing entry.
///
/// The `url` is the work's identity: deduplication anywhere in the system
/// compares locators, never titles or tag sets. Tags are kept in source
/// order and are not deduplicated or normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkRecord {
    /// Unique locator for the work
    pub url: String,

    /// Work title
    pub title: String,

    /// Attributed author, `"Anonymous"` when absent
    pub author: String,

    /// Primary fandom, may be empty
    pub fandom: String,

    /// Descriptive tags in source order; duplicates allowed
    pub tags: Vec<String>,

    /// Work summary, may be empty
    pub summary: String,

    /// Hit count, 0 when unknown
    pub hits: u64,

    /// Kudos count, 0 when unknown
    pub kudos: u64,
}

impl WorkRecord {
    /// Create a record with everything but identity, title, and tags
    /// defaulted (anonymous author, empty fandom/summary, zeroed counts).
    pub fn new(url: impl Into<String>, title: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            author: ANONYMOUS_AUTHOR.to_string(),
            fandom: String::new(),
            tags,
            summary: String::new(),
            hits: 0,
            kudos: 0,
        }
    }

    /// Set the author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Set the fandom.
    pub fn with_fandom(mut self, fandom: impl Into<String>) -> Self {
        self.fandom = fandom.into();
        self
    }

    /// Set the summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Set hit and kudos counts.
    pub fn with_stats(mut self, hits: u64, kudos: u64) -> Self {
        self.hits = hits;
        self.kudos = kudos;
        self
    }

    /// Whether the work carries any tag signal at all.
    pub fn has_tags(&self) -> bool {
        !self.tags.is_empty()
    }
}
