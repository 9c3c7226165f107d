//! Sentiment classification for CryptoV7 news headlines.
//!
//! Two classifier variants sit behind one `classify` contract: a hosted
//! inference model (optional, selected at startup when an endpoint is
//! configured and reachable) and a deterministic crypto-lexicon fallback.
//! Callers never see which variant served a call; the selected mode is fixed
//! for the process lifetime.

mod classifier;
mod error;
mod lexicon;
mod model;
mod types;

pub use classifier::{Classifier, ClassifierMode};
pub use error::SentimentError;
pub use lexicon::lexicon_score;
pub use model::ModelClassifier;
pub use types::{Sentiment, SentimentLabel};
