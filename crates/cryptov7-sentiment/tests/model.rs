//! Integration tests for the model classifier and startup selection,
//! using wiremock HTTP mocks.

use cryptov7_sentiment::{Classifier, ClassifierMode, ModelClassifier, SentimentLabel};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn model_classify_parses_label_and_score() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/classify"))
        .and(body_json(serde_json::json!({ "inputs": "Bitcoin surges" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "label": "positive",
            "score": 0.93
        })))
        .mount(&server)
        .await;

    let model = ModelClassifier::new(&server.uri());
    let sentiment = model.classify("Bitcoin surges").await.expect("classify");
    assert_eq!(sentiment.label, SentimentLabel::Positive);
    assert!((sentiment.score - 0.93).abs() < 1e-6);
}

#[tokio::test]
async fn model_rejects_unknown_labels() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/classify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "label": "bullish",
            "score": 0.8
        })))
        .mount(&server)
        .await;

    let model = ModelClassifier::new(&server.uri());
    model
        .classify("anything")
        .await
        .expect_err("unknown label must error");
}

#[tokio::test]
async fn model_surfaces_server_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/classify"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let model = ModelClassifier::new(&server.uri());
    model.classify("anything").await.expect_err("503 must error");
}

#[tokio::test]
async fn init_selects_model_when_warmup_succeeds() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/classify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "label": "neutral",
            "score": 0.5
        })))
        .mount(&server)
        .await;

    let classifier = Classifier::init(Some(&server.uri())).await;
    assert_eq!(classifier.mode(), ClassifierMode::Model);
}

#[tokio::test]
async fn init_falls_back_when_warmup_fails() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/classify"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let classifier = Classifier::init(Some(&server.uri())).await;
    assert_eq!(classifier.mode(), ClassifierMode::Fallback);

    // Once degraded, classification is served by the lexicon and never errors.
    let sentiment = classifier
        .classify("Bitcoin rally gains momentum")
        .await
        .expect("fallback classify");
    assert_eq!(sentiment.label, SentimentLabel::Positive);
}
