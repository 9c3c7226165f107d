//! Handlers for the news routes.

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::Deserialize;

use cryptov7_news::{NewsBatch, DEFAULT_SYMBOL_PAGE_SIZE, DEFAULT_TOPIC, DEFAULT_TOPIC_PAGE_SIZE};

use crate::api::{map_news_error, normalize_page_size, ApiError, ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

#[derive(Debug, Deserialize)]
pub(super) struct CryptoNewsParams {
    query: Option<String>,
    page_size: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub(super) struct SymbolNewsParams {
    page_size: Option<usize>,
}

/// `GET /api/news/crypto?query=&page_size=`
pub(super) async fn get_crypto_news(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<CryptoNewsParams>,
) -> Result<Json<ApiResponse<NewsBatch>>, ApiError> {
    let query = params
        .query
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .unwrap_or(DEFAULT_TOPIC);
    let page_size = normalize_page_size(params.page_size, DEFAULT_TOPIC_PAGE_SIZE);

    let batch = state
        .news
        .crypto_news(query, page_size)
        .await
        .map_err(|e| map_news_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: batch,
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// `GET /api/news/symbol/{symbol}?page_size=`
pub(super) async fn get_symbol_news(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(symbol): Path<String>,
    Query(params): Query<SymbolNewsParams>,
) -> Result<Json<ApiResponse<NewsBatch>>, ApiError> {
    let symbol = symbol.trim().to_uppercase();
    let page_size = normalize_page_size(params.page_size, DEFAULT_SYMBOL_PAGE_SIZE);

    let batch = state
        .news
        .symbol_news(&symbol, page_size)
        .await
        .map_err(|e| map_news_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: batch,
        meta: ResponseMeta::new(req_id.0),
    }))
}
