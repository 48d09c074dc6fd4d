//! # storyrec-engine
//!
//! The recommendation engine: derives a ranked tag query from the seed
//! set's dominant topic and relaxes it against an external search backend
//! until enough novel works are found.
//!
//! The engine is strictly synchronous: one blocking fetch per query, fully
//! consumed before the relax decision. Collaborators plug in through the
//! [`SearchFetcher`] and [`WorkParser`] traits; a fetch failure terminates
//! the run gracefully with whatever was already accumulated.

pub mod config;
pub mod error;
pub mod recommender;
pub mod traits;

pub use config::RecommenderConfig;
pub use error::EngineError;
pub use recommender::{Recommendation, Recommender};
pub use traits::{FetchError, SearchFetcher, WorkParser};
