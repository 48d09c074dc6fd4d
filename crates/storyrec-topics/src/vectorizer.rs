//! TF-IDF features over tags-as-tokens.
//!
//! Each tag is one atomic token: documents are split on the corpus
//! delimiter only, so multi-word tags survive intact. Tags differing in
//! case or internal whitespace stay distinct tokens; the source data is
//! taken as-is.

use std::collections::HashMap;

use crate::corpus::split_tags;
use crate::error::TopicsError;
use crate::matrix::Matrix;

/// TF-IDF weighted feature matrix plus its ordered vocabulary.
///
/// The vocabulary is first-encounter ordered and index-stable: column `j`
/// refers to `vocabulary[j]` for the lifetime of the run. Only tags seen
/// in the corpus can appear as columns.
#[derive(Debug, Clone)]
pub struct TagFeatures {
    matrix: Matrix,
    vocabulary: Vec<String>,
}

impl TagFeatures {
    /// Build TF-IDF features from a tag corpus.
    ///
    /// Weight for (work, tag) = within-document tag count times smoothed
    /// IDF `ln((1 + n) / (1 + df)) + 1`, with each row L2-normalized, so
    /// niche tags dominate topic discovery over ubiquitous ones.
    pub fn from_corpus(corpus: &[String]) -> Result<Self, TopicsError> {
        let mut vocabulary: Vec<String> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        // Per-document token counts, keyed by vocabulary index
        let mut doc_counts: Vec<HashMap<usize, usize>> = Vec::with_capacity(corpus.len());
        let mut doc_frequencies: Vec<usize> = Vec::new();

        for document in corpus {
            let mut counts: HashMap<usize, usize> = HashMap::new();
            for tag in split_tags(document) {
                let col = match index.get(tag) {
                    Some(&col) => col,
                    None => {
                        let col = vocabulary.len();
                        vocabulary.push(tag.to_string());
                        index.insert(tag.to_string(), col);
                        doc_frequencies.push(0);
                        col
                    }
                };
                *counts.entry(col).or_insert(0) += 1;
            }
            for &col in counts.keys() {
                doc_frequencies[col] += 1;
            }
            doc_counts.push(counts);
        }

        if vocabulary.is_empty() {
            return Err(TopicsError::EmptyCorpus);
        }

        let n = corpus.len() as f32;
        let mut matrix = Matrix::zeros(corpus.len(), vocabulary.len());
        for (row, counts) in doc_counts.iter().enumerate() {
            for (&col, &count) in counts {
                let idf = ((1.0 + n) / (1.0 + doc_frequencies[col] as f32)).ln() + 1.0;
                matrix.set(row, col, count as f32 * idf);
            }
            let norm: f32 = matrix.row(row).iter().map(|v| v * v).sum::<f32>().sqrt();
            if norm > 0.0 {
                for col in 0..vocabulary.len() {
                    matrix.set(row, col, matrix.get(row, col) / norm);
                }
            }
        }

        tracing::debug!(
            works = corpus.len(),
            vocabulary = vocabulary.len(),
            "built tag feature matrix"
        );

        Ok(Self { matrix, vocabulary })
    }

    /// The weighted feature matrix (works x vocabulary).
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// The ordered vocabulary.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Number of distinct tags observed.
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(docs: &[&str]) -> Vec<String> {
        docs.iter().map(|d| d.to_string()).collect()
    }

    #[test]
    fn test_vocabulary_is_first_encounter_ordered() {
        let features =
            TagFeatures::from_corpus(&corpus(&["fluff, angst", "angst, slow burn"])).unwrap();
        assert_eq!(features.vocabulary(), &["fluff", "angst", "slow burn"]);
    }

    #[test]
    fn test_multi_word_tags_stay_atomic() {
        let features = TagFeatures::from_corpus(&corpus(&["canon divergence, found family"]))
            .unwrap();
        assert_eq!(
            features.vocabulary(),
            &["canon divergence", "found family"]
        );
    }

    #[test]
    fn test_case_variants_are_distinct_tokens() {
        let features = TagFeatures::from_corpus(&corpus(&["Fluff, fluff"])).unwrap();
        assert_eq!(features.vocabulary(), &["Fluff", "fluff"]);
    }

    #[test]
    fn test_rare_tag_outweighs_ubiquitous_tag() {
        // "angst" appears in every document, "pining" in one
        let features = TagFeatures::from_corpus(&corpus(&[
            "angst, pining",
            "angst, fluff",
            "angst, hurt",
        ]))
        .unwrap();
        let matrix = features.matrix();
        let angst = features.vocabulary().iter().position(|t| t == "angst").unwrap();
        let pining = features
            .vocabulary()
            .iter()
            .position(|t| t == "pining")
            .unwrap();
        assert!(matrix.get(0, pining) > matrix.get(0, angst));
    }

    #[test]
    fn test_rows_are_l2_normalized() {
        let features = TagFeatures::from_corpus(&corpus(&["a b, c d", "e f"])).unwrap();
        for row in 0..features.matrix().rows() {
            let norm: f32 = features.matrix().row(row).iter().map(|v| v * v).sum();
            assert!((norm - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_empty_document_yields_zero_row() {
        let features = TagFeatures::from_corpus(&corpus(&["fluff", ""])).unwrap();
        assert!(features.matrix().row(1).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_no_tags_anywhere_is_empty_corpus() {
        assert!(matches!(
            TagFeatures::from_corpus(&corpus(&["", ""])),
            Err(TopicsError::EmptyCorpus)
        ));
    }

    #[test]
    fn test_duplicate_tags_raise_term_frequency() {
        let features = TagFeatures::from_corpus(&corpus(&["fluff, fluff, angst", "angst"]))
            .unwrap();
        let fluff = features.vocabulary().iter().position(|t| t == "fluff").unwrap();
        let angst = features.vocabulary().iter().position(|t| t == "angst").unwrap();
        assert!(features.matrix().get(0, fluff) > features.matrix().get(0, angst));
    }
}
