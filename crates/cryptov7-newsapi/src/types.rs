//! News provider response types.
//!
//! Models the JSON returned by the provider's `/everything` endpoint.
//! Success envelopes look like `{"status": "ok", "totalResults": N,
//! "articles": [...]}`; error envelopes carry `code` and `message` instead.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Success envelope for `/everything`.
#[derive(Debug, Deserialize)]
pub(crate) struct ArticlesResponse {
    pub status: String,
    #[serde(default)]
    pub articles: Vec<RawArticle>,
}

/// Error envelope: `{"status": "error", "code": ..., "message": ...}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Article record as the provider sends it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawArticle {
    #[serde(default)]
    pub source: RawSource,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawSource {
    #[serde(default)]
    pub name: Option<String>,
}

/// A normalized news article. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub source: String,
    pub published_at: Option<DateTime<Utc>>,
    pub url: String,
}

impl RawArticle {
    /// Normalize a raw record, dropping unusable ones.
    ///
    /// The provider substitutes `"[Removed]"` for articles pulled after
    /// indexing; those and title-less records are filtered out here.
    pub(crate) fn normalize(self) -> Option<Article> {
        let title = self.title.filter(|t| !t.trim().is_empty() && t != "[Removed]")?;
        Some(Article {
            title,
            source: self.source.name.unwrap_or_else(|| "unknown".to_string()),
            published_at: self.published_at,
            url: self.url.unwrap_or_default(),
        })
    }
}
