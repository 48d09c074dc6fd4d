//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Configuration for one recommendation run.
///
/// Owned by the [`crate::Recommender`] for the duration of a call; there
/// is no process-wide state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommenderConfig {
    /// Requested number of latent topics; clamped to
    /// `[1, vocabulary size]` before fitting
    #[serde(default = "default_topic_count")]
    pub topic_count: usize,

    /// Target number of recommendations
    #[serde(default = "default_target_count")]
    pub target_count: usize,

    /// Number of top dominant-topic tags forming the initial query
    #[serde(default = "default_query_tag_count")]
    pub query_tag_count: usize,

    /// Random seed for the topic factorization; fixed so identical input
    /// yields identical recommendations
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            topic_count: default_topic_count(),
            target_count: default_target_count(),
            query_tag_count: default_query_tag_count(),
            seed: default_seed(),
        }
    }
}

fn default_topic_count() -> usize {
    150
}
fn default_target_count() -> usize {
    5
}
fn default_query_tag_count() -> usize {
    5
}
fn default_seed() -> u64 {
    17
}
