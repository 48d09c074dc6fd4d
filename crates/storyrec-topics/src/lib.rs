//! # storyrec-topics
//!
//! Tag-based topic discovery for the storyrec engine.
//!
//! Turns a seed set of works into a weighted tag feature space and
//! decomposes it into latent topics:
//! - Corpus building: one tag document per work
//! - TF-IDF weighting with tags as atomic tokens (multi-word tags are
//!   never split, and never case/whitespace normalized)
//! - Seeded probabilistic factorization into K topics
//! - Dominant-topic selection and ranked query-tag derivation

pub mod corpus;
pub mod error;
pub mod matrix;
pub mod model;
pub mod vectorizer;

pub use corpus::{build_corpus, TAG_DELIMITER};
pub use error::TopicsError;
pub use matrix::Matrix;
pub use model::TopicModel;
pub use vectorizer::TagFeatures;
