use thiserror::Error;

/// Errors returned by the news provider client.
///
/// All three request-level failures are terminal for the enclosing request:
/// the provider's free tier allows 100 requests/day, so no retry policy is
/// layered on top (retries would only mask quota exhaustion).
#[derive(Debug, Error)]
pub enum NewsApiError {
    /// API key missing from configuration, or rejected by the provider.
    #[error("News API key is invalid or not configured")]
    Unauthorized,

    /// The provider's request quota is exhausted (HTTP 429 / `rateLimited`).
    #[error("too many requests")]
    RateLimited,

    /// Network, TLS, or timeout failure before a provider response arrived.
    #[error("news provider unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),

    /// The provider returned an error envelope not covered above.
    #[error("news provider error ({code}): {message}")]
    Provider { code: String, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
