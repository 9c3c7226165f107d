//! HTTP client for the hosted sentiment-inference endpoint.

use serde::{Deserialize, Serialize};

use crate::error::SentimentError;
use crate::types::{Sentiment, SentimentLabel};

/// Client for a hosted sentiment model serving `POST /classify`.
///
/// The endpoint takes `{"inputs": "<text>"}` and answers
/// `{"label": "positive" | "neutral" | "negative", "score": 0.0..=1.0}`.
pub struct ModelClassifier {
    client: reqwest::Client,
    url: String,
}

#[derive(Serialize)]
struct ClassifyRequest<'a> {
    inputs: &'a str,
}

#[derive(Deserialize)]
struct ClassifyResponse {
    label: String,
    score: f32,
}

impl ModelClassifier {
    /// Create a new `ModelClassifier`.
    #[must_use]
    pub fn new(model_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: format!("{}/classify", model_url.trim_end_matches('/')),
        }
    }

    /// Classify one text via the remote model.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Http`] on transport failure and
    /// [`SentimentError::Model`] for non-2xx responses, unparseable bodies,
    /// or unknown labels.
    pub async fn classify(&self, text: &str) -> Result<Sentiment, SentimentError> {
        let response = self
            .client
            .post(&self.url)
            .json(&ClassifyRequest { inputs: text })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SentimentError::Model(format!(
                "model returned status {}",
                response.status()
            )));
        }

        let parsed: ClassifyResponse = response
            .json()
            .await
            .map_err(|e| SentimentError::Model(format!("model response parse error: {e}")))?;

        let label = match parsed.label.to_ascii_lowercase().as_str() {
            "positive" => SentimentLabel::Positive,
            "negative" => SentimentLabel::Negative,
            "neutral" => SentimentLabel::Neutral,
            other => {
                return Err(SentimentError::Model(format!(
                    "model returned unknown label '{other}'"
                )))
            }
        };

        Ok(Sentiment {
            label,
            score: parsed.score.clamp(0.0, 1.0),
        })
    }

    /// One-shot warmup request issued during startup selection.
    ///
    /// # Errors
    ///
    /// Propagates any classification error; the caller treats a failed
    /// warmup as an initialization failure and falls back to the lexicon.
    pub async fn warmup(&self) -> Result<(), SentimentError> {
        self.classify("warmup").await.map(|_| ())
    }
}
