//! HTTP client for the news provider's search endpoint.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};

use crate::error::NewsApiError;
use crate::types::{Article, ArticlesResponse, ErrorResponse};

const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";

/// Provider page-size cap (free tier).
pub const MAX_PAGE_SIZE: usize = 100;

/// Client for the news provider REST API.
///
/// Manages the HTTP client, API key, and base URL. Use [`NewsApiClient::new`]
/// for production or [`NewsApiClient::with_base_url`] to point at a mock
/// server in tests. A client constructed without a key returns
/// [`NewsApiError::Unauthorized`] from every call without going on the wire.
pub struct NewsApiClient {
    client: Client,
    api_key: Option<String>,
    base_url: Url,
}

impl NewsApiClient {
    /// Creates a new client pointed at the production provider.
    ///
    /// # Errors
    ///
    /// Returns [`NewsApiError::Unreachable`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(
        api_key: Option<String>,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, NewsApiError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`NewsApiError::Unreachable`] if the underlying
    /// `reqwest::Client` cannot be constructed, or [`NewsApiError::Provider`]
    /// if `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: Option<String>,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, NewsApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()
            .map_err(NewsApiError::Unreachable)?;

        // Keep exactly one trailing slash so Url::join appends a path
        // segment instead of replacing the last one.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| NewsApiError::Provider {
            code: "invalid_base_url".to_string(),
            message: format!("invalid base URL '{base_url}': {e}"),
        })?;

        Ok(Self {
            client,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            base_url,
        })
    }

    /// Whether an API key is configured on this client.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Searches the provider's article index.
    ///
    /// Calls `/everything` with `language=en` and `sortBy=publishedAt`,
    /// clamping `page_size` to the provider limit of 100. Unusable records
    /// (missing or `"[Removed]"` titles) are dropped from the result.
    ///
    /// # Errors
    ///
    /// - [`NewsApiError::Unauthorized`] if no key is configured or the
    ///   provider rejects it (HTTP 401).
    /// - [`NewsApiError::RateLimited`] if the daily quota is exhausted
    ///   (HTTP 429).
    /// - [`NewsApiError::Unreachable`] on network or timeout failure.
    /// - [`NewsApiError::Provider`] for any other provider error envelope.
    /// - [`NewsApiError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn search(
        &self,
        query: &str,
        page_size: usize,
    ) -> Result<Vec<Article>, NewsApiError> {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::warn!("news fetch attempted without a configured API key");
            return Err(NewsApiError::Unauthorized);
        };

        let page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        let url = self.build_url(
            "everything",
            &[
                ("q", query),
                ("apiKey", api_key),
                ("pageSize", &page_size.to_string()),
                ("language", "en"),
                ("sortBy", "publishedAt"),
            ],
        );

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(NewsApiError::Unreachable)?;

        let status = response.status();
        let body = response.text().await.map_err(NewsApiError::Unreachable)?;

        if !status.is_success() {
            return Err(Self::map_error_status(status, &body));
        }

        let envelope: ArticlesResponse =
            serde_json::from_str(&body).map_err(|e| NewsApiError::Deserialize {
                context: format!("everything(q={query})"),
                source: e,
            })?;

        if envelope.status != "ok" {
            // A 2xx with a non-ok status should not happen; treat it like
            // an error envelope rather than returning an empty result.
            return Err(Self::map_error_body(&body));
        }

        let articles: Vec<Article> = envelope
            .articles
            .into_iter()
            .filter_map(crate::types::RawArticle::normalize)
            .collect();

        tracing::debug!(query, count = articles.len(), "fetched news articles");
        Ok(articles)
    }

    /// Builds the full request URL with percent-encoded query parameters.
    fn build_url(&self, endpoint: &str, params: &[(&str, &str)]) -> Url {
        let mut url = self
            .base_url
            .join(endpoint)
            .unwrap_or_else(|_| self.base_url.clone());
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
        }
        url
    }

    /// Maps a non-2xx response onto the error taxonomy.
    ///
    /// The HTTP status takes precedence; the provider `code` in the body is
    /// consulted for anything else.
    fn map_error_status(status: StatusCode, body: &str) -> NewsApiError {
        match status {
            StatusCode::UNAUTHORIZED => NewsApiError::Unauthorized,
            StatusCode::TOO_MANY_REQUESTS => NewsApiError::RateLimited,
            _ => Self::map_error_body(body),
        }
    }

    fn map_error_body(body: &str) -> NewsApiError {
        let parsed: ErrorResponse = serde_json::from_str(body).unwrap_or(ErrorResponse {
            code: None,
            message: None,
        });
        match parsed.code.as_deref() {
            Some("apiKeyMissing" | "apiKeyInvalid" | "apiKeyDisabled") => {
                NewsApiError::Unauthorized
            }
            Some("rateLimited") => NewsApiError::RateLimited,
            code => NewsApiError::Provider {
                code: code.unwrap_or("unknown").to_string(),
                message: parsed
                    .message
                    .unwrap_or_else(|| "unknown provider error".to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> NewsApiClient {
        NewsApiClient::with_base_url(Some("test-key".to_string()), 30, "cryptov7-test", base_url)
            .expect("client construction should not fail")
    }

    #[test]
    fn build_url_constructs_correct_query_string() {
        let client = test_client("https://newsapi.org/v2");
        let url = client.build_url("everything", &[("q", "bitcoin"), ("pageSize", "10")]);
        assert_eq!(
            url.as_str(),
            "https://newsapi.org/v2/everything?q=bitcoin&pageSize=10"
        );
    }

    #[test]
    fn build_url_strips_trailing_slash() {
        let client = test_client("https://newsapi.org/v2/");
        let url = client.build_url("everything", &[("q", "eth")]);
        assert_eq!(url.as_str(), "https://newsapi.org/v2/everything?q=eth");
    }

    #[test]
    fn build_url_encodes_special_characters() {
        let client = test_client("https://newsapi.org/v2");
        let url = client.build_url("everything", &[("q", "bitcoin & ethereum")]);
        assert!(
            url.as_str().contains("bitcoin+%26+ethereum")
                || url.as_str().contains("bitcoin%20%26%20ethereum"),
            "query param should be percent-encoded: {url}"
        );
    }

    #[test]
    fn missing_key_is_reported_before_any_request() {
        let client = NewsApiClient::with_base_url(None, 30, "cryptov7-test", "https://newsapi.org")
            .expect("client");
        assert!(!client.has_api_key());
    }

    #[test]
    fn error_body_code_maps_to_unauthorized() {
        let body = r#"{"status":"error","code":"apiKeyInvalid","message":"bad key"}"#;
        let err = NewsApiClient::map_error_body(body);
        assert!(matches!(err, NewsApiError::Unauthorized));
    }

    #[test]
    fn error_body_code_maps_to_rate_limited() {
        let body = r#"{"status":"error","code":"rateLimited","message":"slow down"}"#;
        let err = NewsApiClient::map_error_body(body);
        assert!(matches!(err, NewsApiError::RateLimited));
    }

    #[test]
    fn unknown_error_body_carries_provider_message() {
        let body = r#"{"status":"error","code":"parametersMissing","message":"q is required"}"#;
        let err = NewsApiClient::map_error_body(body);
        match err {
            NewsApiError::Provider { code, message } => {
                assert_eq!(code, "parametersMissing");
                assert_eq!(message, "q is required");
            }
            other => panic!("expected Provider error, got {other:?}"),
        }
    }
}
