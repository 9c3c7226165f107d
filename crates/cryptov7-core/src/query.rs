//! Query types and cache-key normalization.
//!
//! Topic queries and symbol queries are distinct key spaces: `Topic("btc")`
//! and `Symbol("btc")` must never collide, so the kind tag is part of the
//! key. The requested page size is part of the key as well — a larger
//! request must not be served a smaller cached batch.

use serde::Serialize;

/// A news lookup as requested by a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewsQuery {
    /// Free-text topic search, e.g. `"bitcoin regulation"`.
    Topic(String),
    /// Ticker-symbol lookup, e.g. `"BTC"`.
    Symbol(String),
}

/// Kind tag carried by [`QueryKey`] and echoed in responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    Topic,
    Symbol,
}

/// Normalized cache key derived from a [`NewsQuery`] and a page size.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    kind: QueryKind,
    text: String,
    page_size: usize,
}

impl QueryKey {
    #[must_use]
    pub fn kind(&self) -> QueryKind {
        self.kind
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

impl NewsQuery {
    /// The raw query text as given, untrimmed.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            NewsQuery::Topic(t) | NewsQuery::Symbol(t) => t,
        }
    }

    /// Whether the query text is empty after trimming.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text().trim().is_empty()
    }

    /// Normalize to a cache key: trim, lowercase, keep the kind tag and
    /// the page size.
    #[must_use]
    pub fn key(&self, page_size: usize) -> QueryKey {
        let kind = match self {
            NewsQuery::Topic(_) => QueryKind::Topic,
            NewsQuery::Symbol(_) => QueryKind::Symbol,
        };
        QueryKey {
            kind,
            text: self.text().trim().to_lowercase(),
            page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_trims_and_lowercases() {
        let key = NewsQuery::Topic(" Bitcoin ".to_string()).key(10);
        assert_eq!(key.text(), "bitcoin");
        assert_eq!(key.kind(), QueryKind::Topic);
        assert_eq!(key.page_size(), 10);
    }

    #[test]
    fn equivalent_topics_share_a_key() {
        let a = NewsQuery::Topic(" Bitcoin ".to_string()).key(10);
        let b = NewsQuery::Topic("bitcoin".to_string()).key(10);
        assert_eq!(a, b);
    }

    #[test]
    fn topic_and_symbol_keys_never_collide() {
        let topic = NewsQuery::Topic("btc".to_string()).key(10);
        let symbol = NewsQuery::Symbol("btc".to_string()).key(10);
        assert_ne!(topic, symbol);
    }

    #[test]
    fn page_sizes_split_the_key_space() {
        let small = NewsQuery::Topic("bitcoin".to_string()).key(2);
        let large = NewsQuery::Topic("bitcoin".to_string()).key(50);
        assert_ne!(small, large);
    }

    #[test]
    fn symbol_case_is_normalized() {
        let a = NewsQuery::Symbol("BTC".to_string()).key(5);
        let b = NewsQuery::Symbol("btc".to_string()).key(5);
        assert_eq!(a, b);
    }

    #[test]
    fn whitespace_only_query_is_empty() {
        assert!(NewsQuery::Topic("   ".to_string()).is_empty());
        assert!(!NewsQuery::Topic("eth".to_string()).is_empty());
    }
}
