//! News service facade: fetch, enrich, cache, serve.

use std::time::Duration;

use serde::Serialize;

use cryptov7_core::{NewsQuery, QueryKind};
use cryptov7_newsapi::NewsApiClient;
use cryptov7_sentiment::{Classifier, ClassifierMode};

use crate::cache::TtlCache;
use crate::enrich::{enrich_counted, EnrichedArticle};
use crate::error::NewsError;

/// Cached results live for five minutes after `put`.
pub const CACHE_TTL: Duration = Duration::from_secs(300);

/// Topic used when a caller omits the query.
pub const DEFAULT_TOPIC: &str = "cryptocurrency";

pub const DEFAULT_TOPIC_PAGE_SIZE: usize = 10;
pub const DEFAULT_SYMBOL_PAGE_SIZE: usize = 5;

/// Ticker symbols mapped to the coin names the provider indexes under.
/// Unknown symbols are searched verbatim.
const SYMBOL_COINS: &[(&str, &str)] = &[
    ("BTC", "bitcoin"),
    ("ETH", "ethereum"),
    ("SOL", "solana"),
    ("XRP", "ripple"),
    ("ADA", "cardano"),
    ("DOT", "polkadot"),
    ("DOGE", "dogecoin"),
    ("SHIB", "shiba inu"),
    ("MATIC", "polygon"),
    ("LINK", "chainlink"),
];

/// One enriched query result as served to callers.
#[derive(Debug, Clone, Serialize)]
pub struct NewsBatch {
    pub query: String,
    pub kind: QueryKind,
    pub articles: Vec<EnrichedArticle>,
    /// How many articles fell back to the neutral/0 label because
    /// classification failed for them.
    pub degraded_count: usize,
    /// Whether this batch was served from the cache.
    pub cached: bool,
}

/// The single entry point coordinating fetcher, classifier, and cache.
pub struct NewsService {
    client: NewsApiClient,
    classifier: Classifier,
    cache: TtlCache,
}

impl NewsService {
    #[must_use]
    pub fn new(client: NewsApiClient, classifier: Classifier) -> Self {
        Self::with_cache_ttl(client, classifier, CACHE_TTL)
    }

    /// Constructor with an explicit TTL, for tests that exercise expiry.
    #[must_use]
    pub fn with_cache_ttl(client: NewsApiClient, classifier: Classifier, ttl: Duration) -> Self {
        Self {
            client,
            classifier,
            cache: TtlCache::new(ttl),
        }
    }

    /// Enriched articles for a free-text topic.
    ///
    /// Cache lookup under the normalized topic key; on miss the full
    /// fetch → enrich → cache path runs. Nothing is cached when the fetch
    /// fails.
    ///
    /// # Errors
    ///
    /// [`NewsError::EmptyQuery`] for blank queries, [`NewsError::Fetch`]
    /// when the provider call fails.
    pub async fn crypto_news(
        &self,
        query: &str,
        page_size: usize,
    ) -> Result<NewsBatch, NewsError> {
        self.lookup(NewsQuery::Topic(query.to_string()), query, page_size)
            .await
    }

    /// Enriched articles for a ticker symbol.
    ///
    /// The symbol is mapped through the fixed symbol table and searched as
    /// `"cryptocurrency {name}"`, cached under a symbol key distinct from
    /// any topic key with the same text.
    ///
    /// # Errors
    ///
    /// Same as [`NewsService::crypto_news`].
    pub async fn symbol_news(
        &self,
        symbol: &str,
        page_size: usize,
    ) -> Result<NewsBatch, NewsError> {
        let provider_query = format!("cryptocurrency {}", coin_name(symbol));
        self.lookup(
            NewsQuery::Symbol(symbol.to_string()),
            &provider_query,
            page_size,
        )
        .await
    }

    async fn lookup(
        &self,
        query: NewsQuery,
        provider_query: &str,
        page_size: usize,
    ) -> Result<NewsBatch, NewsError> {
        if query.is_empty() {
            return Err(NewsError::EmptyQuery);
        }

        // Key on the clamped size so requests above the provider limit
        // share an entry with the batch they actually receive.
        let page_size = page_size.clamp(1, cryptov7_newsapi::MAX_PAGE_SIZE);
        let key = query.key(page_size);
        if let Some(enrichment) = self.cache.get(&key).await {
            tracing::info!(query = key.text(), page_size, "serving news from cache");
            return Ok(NewsBatch {
                query: key.text().to_string(),
                kind: key.kind(),
                articles: enrichment.articles,
                degraded_count: enrichment.degraded,
                cached: true,
            });
        }

        tracing::info!(query = provider_query, page_size, "fetching news");
        let fetched = self.client.search(provider_query, page_size).await?;
        let enrichment = enrich_counted(&self.classifier, fetched).await;

        self.cache.put(key.clone(), enrichment.clone()).await;

        Ok(NewsBatch {
            query: key.text().to_string(),
            kind: key.kind(),
            articles: enrichment.articles,
            degraded_count: enrichment.degraded,
            cached: false,
        })
    }

    /// Which classifier variant is serving this process.
    #[must_use]
    pub fn classifier_mode(&self) -> ClassifierMode {
        self.classifier.mode()
    }

    /// Whether a provider API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.client.has_api_key()
    }

    /// One-article probe of the provider, for operator health checks.
    ///
    /// # Errors
    ///
    /// Propagates the fetch error; [`NewsError::Fetch`] with
    /// `Unauthorized` means the key is missing or rejected.
    pub async fn probe(&self) -> Result<(), NewsError> {
        self.client.search(DEFAULT_TOPIC, 1).await?;
        Ok(())
    }
}

/// Map a ticker to the coin name the provider indexes under.
fn coin_name(symbol: &str) -> String {
    let upper = symbol.trim().to_uppercase();
    SYMBOL_COINS
        .iter()
        .find(|(sym, _)| *sym == upper)
        .map_or_else(|| symbol.trim().to_string(), |(_, name)| (*name).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_symbols_map_to_coin_names() {
        assert_eq!(coin_name("BTC"), "bitcoin");
        assert_eq!(coin_name("btc"), "bitcoin");
        assert_eq!(coin_name(" eth "), "ethereum");
        assert_eq!(coin_name("SHIB"), "shiba inu");
    }

    #[test]
    fn unknown_symbols_pass_through_verbatim() {
        assert_eq!(coin_name("PEPE"), "PEPE");
        assert_eq!(coin_name(" pepe "), "pepe");
    }
}
