//! News enrichment for CryptoV7.
//!
//! Fetches articles from the news provider, annotates each headline with a
//! sentiment label, and memoizes results per normalized query for five
//! minutes. [`NewsService`] is the single entry point consumed by the HTTP
//! layer and the CLI.

mod cache;
mod enrich;
mod error;
mod service;

pub use cache::TtlCache;
pub use enrich::{enrich, EnrichedArticle, Enrichment};
pub use error::NewsError;
pub use service::{
    NewsBatch, NewsService, CACHE_TTL, DEFAULT_SYMBOL_PAGE_SIZE, DEFAULT_TOPIC,
    DEFAULT_TOPIC_PAGE_SIZE,
};
