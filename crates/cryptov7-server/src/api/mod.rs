mod news;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use cryptov7_news::{NewsError, NewsService};
use cryptov7_newsapi::NewsApiError;

use crate::middleware::{enforce_rate_limit, request_id, RateLimitState, RequestId};

#[derive(Clone)]
pub struct AppState {
    pub news: Arc<NewsService>,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
struct HealthData {
    status: &'static str,
    classifier_mode: String,
    news_api_key_configured: bool,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "unauthorized" => StatusCode::UNAUTHORIZED,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            "rate_limited" => StatusCode::TOO_MANY_REQUESTS,
            "upstream_unreachable" => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

pub(super) fn normalize_page_size(page_size: Option<usize>, default: usize) -> usize {
    page_size.unwrap_or(default).clamp(1, 100)
}

/// Map a facade error onto the response envelope.
///
/// Fetcher failures keep their documented human-readable messages;
/// classifier failures never reach this function.
pub(super) fn map_news_error(request_id: String, error: &NewsError) -> ApiError {
    match error {
        NewsError::Fetch(NewsApiError::Unauthorized) => {
            ApiError::new(request_id, "unauthorized", error.to_string())
        }
        NewsError::Fetch(NewsApiError::RateLimited) => {
            ApiError::new(request_id, "rate_limited", error.to_string())
        }
        NewsError::Fetch(NewsApiError::Unreachable(_)) => {
            tracing::warn!(error = %error, "news provider unreachable");
            ApiError::new(request_id, "upstream_unreachable", "news provider unreachable")
        }
        NewsError::Fetch(NewsApiError::Provider { .. }) | NewsError::EmptyQuery => {
            ApiError::new(request_id, "bad_request", error.to_string())
        }
        NewsError::Fetch(NewsApiError::Deserialize { .. }) => {
            tracing::error!(error = %error, "unexpected provider response shape");
            ApiError::new(request_id, "internal_error", "unexpected provider response")
        }
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

fn news_router(rate_limit: RateLimitState) -> Router<AppState> {
    Router::new()
        .route("/api/news/crypto", get(news::get_crypto_news))
        .route("/api/news/symbol/{symbol}", get(news::get_symbol_news))
        .layer(axum::middleware::from_fn_with_state(
            rate_limit,
            enforce_rate_limit,
        ))
}

pub fn build_app(state: AppState, rate_limit: RateLimitState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .merge(news_router(rate_limit))
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let meta = ResponseMeta::new(req_id.0);
    let key_configured = state.news.has_api_key();

    if !key_configured {
        tracing::warn!("health check: news API key not configured");
    }

    (
        StatusCode::OK,
        Json(ApiResponse {
            data: HealthData {
                status: if key_configured { "ok" } else { "degraded" },
                classifier_mode: state.news.classifier_mode().to_string(),
                news_api_key_configured: key_configured,
            },
            meta,
        }),
    )
}

pub fn default_rate_limit_state() -> RateLimitState {
    RateLimitState::new(60, Duration::from_secs(60))
}
