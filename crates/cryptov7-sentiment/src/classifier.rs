//! Classifier variant selection and the unified `classify` contract.

use crate::error::SentimentError;
use crate::lexicon::lexicon_score;
use crate::model::ModelClassifier;
use crate::types::Sentiment;

/// Which variant is serving classifications. Selected once at startup and
/// immutable for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierMode {
    Model,
    Fallback,
}

impl std::fmt::Display for ClassifierMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassifierMode::Model => write!(f, "model"),
            ClassifierMode::Fallback => write!(f, "fallback"),
        }
    }
}

/// Headline sentiment classifier.
///
/// Built once via [`Classifier::init`] and injected into the enrichment
/// pipeline; there is no hidden global mode.
pub enum Classifier {
    Model(ModelClassifier),
    Fallback,
}

impl Classifier {
    /// Select a variant at process start.
    ///
    /// When a model URL is configured, the model client is built and warmed
    /// up with one request; any failure there permanently selects the
    /// lexicon fallback and logs the degradation. No URL means fallback
    /// without a network round trip.
    pub async fn init(model_url: Option<&str>) -> Self {
        let Some(url) = model_url else {
            tracing::info!("no sentiment model configured; using lexicon fallback");
            return Classifier::Fallback;
        };

        let model = ModelClassifier::new(url);
        match model.warmup().await {
            Ok(()) => {
                tracing::info!(url, "sentiment model initialized");
                Classifier::Model(model)
            }
            Err(e) => {
                tracing::warn!(
                    url,
                    error = %e,
                    "sentiment model initialization failed; falling back to lexicon"
                );
                Classifier::Fallback
            }
        }
    }

    #[must_use]
    pub fn mode(&self) -> ClassifierMode {
        match self {
            Classifier::Model(_) => ClassifierMode::Model,
            Classifier::Fallback => ClassifierMode::Fallback,
        }
    }

    /// Classify one headline.
    ///
    /// The fallback variant is pure and never errors. The model variant
    /// surfaces per-call failures so the enrichment pipeline can absorb them
    /// per-article (neutral, zero confidence) instead of aborting a batch.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError`] only from the model variant.
    pub async fn classify(&self, text: &str) -> Result<Sentiment, SentimentError> {
        match self {
            Classifier::Model(model) => model.classify(text).await,
            Classifier::Fallback => Ok(Sentiment::from_lexicon(lexicon_score(text))),
        }
    }
}
