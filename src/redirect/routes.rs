use axum::{routing::get, Router};
use std::sync::Arc;

use crate::store::UrlMapStore;

use super::handlers::{redirect_url, RedirectState};

pub fn create_redirect_router(store: UrlMapStore) -> Router {
    let state = Arc::new(RedirectState { store });

    Router::new()
        .route("/{code}", get(redirect_url))
        .with_state(state)
}
