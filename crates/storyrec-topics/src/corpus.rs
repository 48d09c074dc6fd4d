//! Tag corpus construction.
//!
//! A corpus has one document per seed work: the work's tags joined with a
//! fixed delimiter. Document order matches the input work order so that
//! topic membership rows stay aligned with works.

use storyrec_types::WorkRecord;

use crate::error::TopicsError;

/// Delimiter used to join tags into a document and to split documents back
/// into tokens. Splitting happens on this exact string, so tags keep their
/// internal whitespace.
pub const TAG_DELIMITER: &str = ", ";

/// Build a tag document per work.
///
/// A work with no tags yields an empty document. Errors with
/// [`TopicsError::EmptyCorpus`] when the seed set is empty or no document
/// carries any tag at all, since no recommendation is possible without tag
/// signal.
pub fn build_corpus(works: &[WorkRecord]) -> Result<Vec<String>, TopicsError> {
    if works.is_empty() {
        return Err(TopicsError::EmptyCorpus);
    }

    let documents: Vec<String> = works
        .iter()
        .map(|work| work.tags.join(TAG_DELIMITER))
        .collect();

    if documents.iter().all(|doc| doc.trim().is_empty()) {
        return Err(TopicsError::EmptyCorpus);
    }

    Ok(documents)
}

/// Split a document back into tag tokens.
///
/// Splits strictly on [`TAG_DELIMITER`]; each trimmed, non-empty piece is
/// one token and is never subdivided further.
pub(crate) fn split_tags(document: &str) -> Vec<&str> {
    document
        .split(TAG_DELIMITER)
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .collect()
}
