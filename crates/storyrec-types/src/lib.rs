//! # storyrec-types
//!
//! Shared domain types for the storyrec system.
//!
//! The central type is [`WorkRecord`]: one recommendable work with its
//! free-form tag set. Records are built once by a fetch/parse collaborator
//! and treated as immutable for the rest of a recommendation run.

pub mod work;

pub use work::WorkRecord;
