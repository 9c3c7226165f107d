//! Enrichment pipeline: join fetched articles with sentiment labels.

use serde::{Deserialize, Serialize};

use cryptov7_newsapi::Article;
use cryptov7_sentiment::{Classifier, Sentiment};

/// An [`Article`] with its derived sentiment attached. Never mutated after
/// creation; owned by the cache entry that holds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedArticle {
    #[serde(flatten)]
    pub article: Article,
    pub sentiment: Sentiment,
}

/// Output of one enrichment pass. Cached as a unit so a hit reports the
/// same degraded count the original pass produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Enrichment {
    pub articles: Vec<EnrichedArticle>,
    /// Articles that could not be classified and got the neutral/0 label.
    pub degraded: usize,
}

/// Classify each article's title exactly once, preserving input order.
///
/// A classifier failure for one article does not fail the batch: that
/// article is labeled neutral with zero confidence and enrichment continues.
pub async fn enrich(classifier: &Classifier, articles: Vec<Article>) -> Vec<EnrichedArticle> {
    enrich_counted(classifier, articles).await.articles
}

pub(crate) async fn enrich_counted(
    classifier: &Classifier,
    articles: Vec<Article>,
) -> Enrichment {
    let mut enriched = Vec::with_capacity(articles.len());
    let mut degraded = 0_usize;

    for article in articles {
        let sentiment = match classifier.classify(&article.title).await {
            Ok(sentiment) => sentiment,
            Err(e) => {
                tracing::warn!(
                    title = %article.title,
                    error = %e,
                    "sentiment classification failed; labeling neutral"
                );
                degraded += 1;
                Sentiment::degraded()
            }
        };
        enriched.push(EnrichedArticle { article, sentiment });
    }

    Enrichment {
        articles: enriched,
        degraded,
    }
}
