use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::models::{LongUrlResponse, ShortUrlResponse, ShortenRequest, UrlQuery};
use crate::store::{ShortenOutcome, UrlMapStore};

pub struct AppState {
    pub store: UrlMapStore,
}

fn internal_error(err: impl std::fmt::Display, context: &str) -> Response {
    tracing::error!(error = %err, "{}", context);
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    "healthy"
}

/// Shorten a long URL. Returns the existing short URL if the long URL was
/// already shortened.
pub async fn shorten_url(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Response {
    let long_url = match payload {
        Ok(Json(ShortenRequest { url: Some(url) })) if !url.is_empty() => url,
        _ => return (StatusCode::BAD_REQUEST, "No url in the request").into_response(),
    };

    match state.store.shorten(&long_url).await {
        Ok(ShortenOutcome::Existing(short)) => {
            format!("short link already exists: {}", short).into_response()
        }
        Ok(ShortenOutcome::Created(short)) => {
            format!("Data received {}", short).into_response()
        }
        Err(e) => internal_error(e, "failed to shorten url"),
    }
}

/// Look up the short URL for a long URL
pub async fn get_short_url(
    State(state): State<Arc<AppState>>,
    Query(query): Query<UrlQuery>,
) -> Response {
    let Some(long_url) = query.url else {
        return (StatusCode::BAD_REQUEST, "No url in the request").into_response();
    };

    match state.store.resolve_long(&long_url).await {
        Ok(Some(shorturl)) => Json(ShortUrlResponse { shorturl }).into_response(),
        Ok(None) => (StatusCode::BAD_REQUEST, "No url stored").into_response(),
        Err(e) => internal_error(e, "failed to resolve long url"),
    }
}

/// Delete a mapping by its short URL
pub async fn delete_short_url(
    State(state): State<Arc<AppState>>,
    Query(query): Query<UrlQuery>,
) -> Response {
    let Some(short_url) = query.url else {
        return (StatusCode::NOT_FOUND, "URL Not Found").into_response();
    };

    match state.store.delete(&short_url).await {
        Ok(true) => "Success".into_response(),
        Ok(false) => (StatusCode::NOT_FOUND, "URL Not Found").into_response(),
        Err(e) => internal_error(e, "failed to delete url"),
    }
}

/// Look up the long URL for a short URL
pub async fn get_long_url(
    State(state): State<Arc<AppState>>,
    Query(query): Query<UrlQuery>,
) -> Response {
    let Some(short_url) = query.url else {
        return (StatusCode::BAD_REQUEST, "No url in the request").into_response();
    };

    match state.store.resolve_short(&short_url).await {
        Ok(Some(longurl)) => Json(LongUrlResponse { longurl }).into_response(),
        Ok(None) => (StatusCode::BAD_REQUEST, "No url stored").into_response(),
        Err(e) => internal_error(e, "failed to resolve short url"),
    }
}
