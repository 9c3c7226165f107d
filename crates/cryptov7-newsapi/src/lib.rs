//! HTTP client for the hosted news provider.
//!
//! Wraps `reqwest` with provider-specific error handling, API key management,
//! and typed response deserialization. The provider wraps every payload in a
//! `{"status": "ok" | "error", ...}` envelope; error envelopes carry a `code`
//! (`apiKeyMissing`, `apiKeyInvalid`, `rateLimited`, ...) that this crate maps
//! onto [`NewsApiError`].

mod client;
mod error;
mod types;

pub use client::{NewsApiClient, MAX_PAGE_SIZE};
pub use error::NewsApiError;
pub use types::Article;
