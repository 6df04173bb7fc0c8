use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::store::UrlMapStore;

use super::handlers::{
    delete_short_url, get_long_url, get_short_url, health_check, shorten_url, AppState,
};

pub fn create_api_router(store: UrlMapStore) -> Router {
    let state = Arc::new(AppState { store });

    Router::new()
        .route("/healthcheck", get(health_check))
        .route(
            "/shorturl",
            post(shorten_url).get(get_short_url).delete(delete_short_url),
        )
        .route("/longurl", get(get_long_url))
        .with_state(state)
}
