use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// News provider API key. `None` means every fetch fails `Unauthorized`;
    /// startup still succeeds so the health route can report the gap.
    pub news_api_key: Option<String>,
    pub news_api_base_url: String,
    /// Hosted sentiment-inference endpoint. `None` selects the lexicon
    /// fallback classifier at startup.
    pub sentiment_model_url: Option<String>,
    pub news_request_timeout_secs: u64,
    pub news_user_agent: String,
    pub rate_limit_max_requests: usize,
    pub rate_limit_window_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field(
                "news_api_key",
                &self.news_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("news_api_base_url", &self.news_api_base_url)
            .field("sentiment_model_url", &self.sentiment_model_url)
            .field(
                "news_request_timeout_secs",
                &self.news_request_timeout_secs,
            )
            .field("news_user_agent", &self.news_user_agent)
            .field("rate_limit_max_requests", &self.rate_limit_max_requests)
            .field("rate_limit_window_secs", &self.rate_limit_window_secs)
            .finish()
    }
}
