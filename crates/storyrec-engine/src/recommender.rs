//! The query relaxation loop and recommendation entry point.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use storyrec_topics::{build_corpus, TagFeatures, TopicModel};
use storyrec_types::WorkRecord;

use crate::config::RecommenderConfig;
use crate::error::EngineError;
use crate::traits::{SearchFetcher, WorkParser};

/// One recommended work plus provenance: which relaxation round (1-based)
/// surfaced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// The recommended work
    pub work: WorkRecord,

    /// Relaxation round that produced the hit
    pub query_round: usize,
}

/// Tag-based work recommender.
///
/// Owns its configuration and collaborators for the duration of one run;
/// nothing persists across calls.
pub struct Recommender<F, P>
where
    F: SearchFetcher,
    P: WorkParser<F::Item>,
{
    config: RecommenderConfig,
    fetcher: F,
    parser: P,
}

impl<F, P> Recommender<F, P>
where
    F: SearchFetcher,
    P: WorkParser<F::Item>,
{
    /// Create a recommender from a config and its two collaborators.
    pub fn new(config: RecommenderConfig, fetcher: F, parser: P) -> Self {
        Self {
            config,
            fetcher,
            parser,
        }
    }

    /// Recommend works for a seed set, in search-rank order.
    ///
    /// Errors only on missing tag signal or a degenerate model fit. A
    /// fetch failure mid-run is recovered: the already-accumulated works
    /// are returned. Zero recommendations is a valid outcome.
    pub fn recommend(&mut self, seeds: &[WorkRecord]) -> Result<Vec<WorkRecord>, EngineError> {
        Ok(self
            .recommend_with_provenance(seeds)?
            .into_iter()
            .map(|r| r.work)
            .collect())
    }

    /// Like [`recommend`](Self::recommend), keeping per-hit provenance.
    pub fn recommend_with_provenance(
        &mut self,
        seeds: &[WorkRecord],
    ) -> Result<Vec<Recommendation>, EngineError> {
        let corpus = build_corpus(seeds)?;
        let features = TagFeatures::from_corpus(&corpus)?;
        let topic_count = self.config.topic_count.clamp(1, features.vocabulary_len());
        let model = TopicModel::fit(&features, topic_count, self.config.seed)?;

        let dominant = model.dominant_topic();
        let query_tags = model.top_tags(dominant, self.config.query_tag_count);
        info!(
            seeds = seeds.len(),
            vocabulary = features.vocabulary_len(),
            topics = topic_count,
            dominant_topic = dominant,
            query = ?query_tags,
            "derived dominant-topic query"
        );

        Ok(self.relax_and_collect(seeds, query_tags))
    }

    /// Issue the query, collect novel results, and relax by dropping the
    /// lowest-ranked tag until the target count is reached or a single
    /// tag has been tried. The tag ranking is computed once; each round
    /// only shrinks it from the tail, so the loop runs at most
    /// `query_tags.len()` rounds.
    fn relax_and_collect(
        &mut self,
        seeds: &[WorkRecord],
        query_tags: Vec<String>,
    ) -> Vec<Recommendation> {
        let mut excluded: HashSet<String> = seeds.iter().map(|w| w.url.clone()).collect();
        let mut accumulated: Vec<Recommendation> = Vec::new();
        let mut tags = query_tags;
        let mut round = 0;

        loop {
            round += 1;
            debug!(round, query = ?tags, "issuing search");
            let items = match self.fetcher.search(&tags) {
                Ok(items) => items,
                Err(err) => {
                    warn!(round, error = %err, "search failed; returning partial results");
                    break;
                }
            };

            for item in &items {
                if accumulated.len() >= self.config.target_count {
                    break;
                }
                let Some(work) = self.parser.parse(item) else {
                    debug!(round, "skipping unparseable result item");
                    continue;
                };
                if !excluded.insert(work.url.clone()) {
                    continue;
                }
                accumulated.push(Recommendation {
                    work,
                    query_round: round,
                });
            }

            if accumulated.len() >= self.config.target_count {
                break;
            }
            if tags.len() > 1 {
                // Relax: a broader query trades topical precision for recall
                tags.pop();
            } else {
                break;
            }
        }

        accumulated.truncate(self.config.target_count);
        accumulated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::FetchError;

    /// Fetcher answering from a fixed table keyed by query length, and
    /// recording every issued query.
    struct TableFetcher {
        by_len: Vec<(usize, Vec<WorkRecord>)>,
        pub queries: Vec<Vec<String>>,
    }

    impl SearchFetcher for TableFetcher {
        type Item = WorkRecord;

        fn search(&mut self, tags: &[String]) -> Result<Vec<WorkRecord>, FetchError> {
            self.queries.push(tags.to_vec());
            Ok(self
                .by_len
                .iter()
                .find(|(len, _)| *len == tags.len())
                .map(|(_, works)| works.clone())
                .unwrap_or_default())
        }
    }

    struct Identity;

    impl WorkParser<WorkRecord> for Identity {
        fn parse(&self, item: &WorkRecord) -> Option<WorkRecord> {
            Some(item.clone())
        }
    }

    fn seed(url: &str, tags: &[&str]) -> WorkRecord {
        WorkRecord::new(url, "Seed", tags.iter().map(|t| t.to_string()).collect())
    }

    #[test]
    fn test_relaxation_drops_lowest_ranked_tag_each_round() {
        let fetcher = TableFetcher {
            by_len: vec![],
            queries: vec![],
        };
        let mut rec = Recommender::new(
            RecommenderConfig {
                query_tag_count: 3,
                ..Default::default()
            },
            fetcher,
            Identity,
        );
        let seeds = vec![seed("s1", &["found family", "slow burn", "canon divergence"])];
        let out = rec.recommend(&seeds).unwrap();
        assert!(out.is_empty());

        let lengths: Vec<usize> = rec.fetcher.queries.iter().map(|q| q.len()).collect();
        assert_eq!(lengths, vec![3, 2, 1]);
        // Each round keeps a prefix of the previous ranking
        for pair in rec.fetcher.queries.windows(2) {
            assert_eq!(pair[1][..], pair[0][..pair[1].len()]);
        }
    }

    #[test]
    fn test_round_provenance_is_recorded() {
        let fetcher = TableFetcher {
            by_len: vec![(2, vec![seed("w2", &[])])],
            queries: vec![],
        };
        let mut rec = Recommender::new(
            RecommenderConfig {
                query_tag_count: 3,
                target_count: 1,
                ..Default::default()
            },
            fetcher,
            Identity,
        );
        let seeds = vec![seed("s1", &["found family", "slow burn", "canon divergence"])];
        let out = rec.recommend_with_provenance(&seeds).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].work.url, "w2");
        // Three-tag query was empty; the two-tag relaxation hit
        assert_eq!(out[0].query_round, 2);
    }
}
