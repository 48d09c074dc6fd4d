//! Latent topic decomposition of the tag feature matrix.
//!
//! Each work is modeled as a mixture of K topics and each topic as a
//! distribution over vocabulary tags. The factorization is a seeded
//! multiplicative-update scheme minimizing generalized KL divergence, so
//! it accepts the real-valued TF-IDF matrix directly and is bit-identical
//! across runs for the same input, topic count, and seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::TopicsError;
use crate::matrix::Matrix;
use crate::vectorizer::TagFeatures;

/// Fixed update-iteration count. No convergence test: a fixed schedule
/// keeps the output deterministic.
const FIT_ITERATIONS: usize = 100;

/// Floor applied to denominators and reconstructed entries.
const EPS: f32 = 1e-9;

/// Fitted topic model state.
#[derive(Debug, Clone)]
pub struct TopicModel {
    topic_count: usize,
    vocabulary: Vec<String>,
    /// K x vocabulary: row k is topic k's distribution over tags
    topic_tags: Matrix,
    /// works x K: row i is work i's topic membership, summing to 1
    doc_topics: Matrix,
}

impl TopicModel {
    /// Fit `topic_count` topics over the feature matrix.
    ///
    /// The caller is expected to clamp `topic_count` into
    /// `[1, vocabulary_len]`; out-of-range counts and a degenerate
    /// all-zero matrix are rejected with [`TopicsError::ModelFit`].
    pub fn fit(features: &TagFeatures, topic_count: usize, seed: u64) -> Result<Self, TopicsError> {
        let matrix = features.matrix();
        if topic_count == 0 {
            return Err(TopicsError::ModelFit(
                "topic count must be at least 1".to_string(),
            ));
        }
        if topic_count > features.vocabulary_len() {
            return Err(TopicsError::ModelFit(format!(
                "topic count {} exceeds vocabulary size {}",
                topic_count,
                features.vocabulary_len()
            )));
        }
        if matrix.is_all_zero() {
            return Err(TopicsError::ModelFit(
                "feature matrix has no non-zero entries".to_string(),
            ));
        }

        let (mut doc_topics, mut topic_tags) = factorize(matrix, topic_count, seed);
        doc_topics.normalize_rows();
        topic_tags.normalize_rows();

        tracing::debug!(
            topics = topic_count,
            works = matrix.rows(),
            vocabulary = matrix.cols(),
            "fitted topic model"
        );

        Ok(Self {
            topic_count,
            vocabulary: features.vocabulary().to_vec(),
            topic_tags,
            doc_topics,
        })
    }

    /// Number of topics.
    pub fn topic_count(&self) -> usize {
        self.topic_count
    }

    /// Work-by-topic membership matrix; each row sums to 1.
    pub fn doc_topics(&self) -> &Matrix {
        &self.doc_topics
    }

    /// Topic-by-tag weight matrix; each row sums to 1.
    pub fn topic_tags(&self) -> &Matrix {
        &self.topic_tags
    }

    /// The topic that best represents the whole seed set: the column with
    /// the highest mean membership across works. The mean (not the sum)
    /// keeps the choice independent of seed-set size, and a strict-max
    /// scan makes the lowest index win ties.
    pub fn dominant_topic(&self) -> usize {
        dominant_topic(&self.doc_topics)
    }

    /// The `n` top-weighted tags of a topic, descending by weight, ties
    /// broken by lower vocabulary index.
    pub fn top_tags(&self, topic: usize, n: usize) -> Vec<String> {
        rank_descending(self.topic_tags.row(topic), n)
            .into_iter()
            .map(|col| self.vocabulary[col].clone())
            .collect()
    }
}

/// Column-wise mean membership, first-encountered maximum wins.
pub fn dominant_topic(doc_topics: &Matrix) -> usize {
    let rows = doc_topics.rows() as f32;
    let mut best_topic = 0;
    let mut best_mean = f32::MIN;
    for topic in 0..doc_topics.cols() {
        let mut sum = 0.0;
        for row in 0..doc_topics.rows() {
            sum += doc_topics.get(row, topic);
        }
        let mean = sum / rows;
        if mean > best_mean {
            best_mean = mean;
            best_topic = topic;
        }
    }
    best_topic
}

/// Indices of the `n` largest weights, descending, lower index on ties.
fn rank_descending(weights: &[f32], n: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..weights.len()).collect();
    indices.sort_by(|&a, &b| {
        weights[b]
            .partial_cmp(&weights[a])
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.cmp(&b))
    });
    indices.truncate(n);
    indices
}

/// Multiplicative-update factorization `V ~= W * H` under generalized KL
/// divergence. Sequential arithmetic and a seeded init keep the result
/// reproducible.
fn factorize(v: &Matrix, k: usize, seed: u64) -> (Matrix, Matrix) {
    let n = v.rows();
    let m = v.cols();
    let mut rng = StdRng::seed_from_u64(seed);

    let mut w = Matrix::zeros(n, k);
    for row in 0..n {
        for col in 0..k {
            w.set(row, col, 0.1 + rng.random::<f32>());
        }
    }
    let mut h = Matrix::zeros(k, m);
    for row in 0..k {
        for col in 0..m {
            h.set(row, col, 0.1 + rng.random::<f32>());
        }
    }

    for _ in 0..FIT_ITERATIONS {
        let wh = multiply(&w, &h);

        // H update: h[t][j] *= sum_i(w[i][t] * v[i][j] / wh[i][j]) / sum_i(w[i][t])
        for t in 0..k {
            let mut col_sum = 0.0;
            for i in 0..n {
                col_sum += w.get(i, t);
            }
            let col_sum = col_sum.max(EPS);
            for j in 0..m {
                let mut numerator = 0.0;
                for i in 0..n {
                    numerator += w.get(i, t) * v.get(i, j) / wh.get(i, j).max(EPS);
                }
                h.set(t, j, h.get(t, j) * numerator / col_sum);
            }
        }

        let wh = multiply(&w, &h);

        // W update: w[i][t] *= sum_j(h[t][j] * v[i][j] / wh[i][j]) / sum_j(h[t][j])
        for t in 0..k {
            let mut row_sum = 0.0;
            for j in 0..m {
                row_sum += h.get(t, j);
            }
            let row_sum = row_sum.max(EPS);
            for i in 0..n {
                let mut numerator = 0.0;
                for j in 0..m {
                    numerator += h.get(t, j) * v.get(i, j) / wh.get(i, j).max(EPS);
                }
                w.set(i, t, w.get(i, t) * numerator / row_sum);
            }
        }
    }

    (w, h)
}

fn multiply(a: &Matrix, b: &Matrix) -> Matrix {
    let mut out = Matrix::zeros(a.rows(), b.cols());
    for i in 0..a.rows() {
        for j in 0..b.cols() {
            let mut sum = 0.0;
            for t in 0..a.cols() {
                sum += a.get(i, t) * b.get(t, j);
            }
            out.set(i, j, sum);
        }
    }
    out
}
