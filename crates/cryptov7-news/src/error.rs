use thiserror::Error;

use cryptov7_newsapi::NewsApiError;

/// Errors surfaced by the news facade.
///
/// Classifier failures never appear here: they are absorbed per article by
/// the enrichment pipeline.
#[derive(Debug, Error)]
pub enum NewsError {
    /// Provider fetch failed; terminal for this request, nothing is cached.
    #[error(transparent)]
    Fetch(#[from] NewsApiError),

    /// The query text was empty after trimming.
    #[error("query must not be empty")]
    EmptyQuery,
}
