//! # storyrec-fetch
//!
//! External collaborators for an Archive of Our Own-style backend: a
//! blocking HTTP client for tag search and paginated collection crawls,
//! and an HTML blurb parser producing [`storyrec_types::WorkRecord`]s.
//!
//! This layer owns everything the engine declares out of scope: query
//! encoding, HTTP timeouts, pagination, and HTML extraction.

pub mod blurb;
pub mod client;

pub use blurb::{Blurb, BlurbParser};
pub use client::{ArchiveClient, ArchiveConfig};
