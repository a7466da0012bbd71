use crate::errors::RetrievalResult;
use crate::models::Evidence;

/// Ranked evidence lookup.
///
/// Implementations return at most `k` items, highest relevance first. "Nothing
/// found" is an empty `Ok`, never an error.
pub trait Retriever: Send + Sync {
    fn search(&self, query: &str, k: usize) -> RetrievalResult<Vec<Evidence>>;
}
