use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use std::sync::Arc;

use crate::store::UrlMapStore;

pub struct RedirectState {
    pub store: UrlMapStore,
}

/// Redirect to the original URL.
///
/// Short URLs are stored with the host prefix included, so the full
/// forward key is rebuilt from the path segment before the lookup.
pub async fn redirect_url(
    State(state): State<Arc<RedirectState>>,
    Path(code): Path<String>,
) -> Response {
    let short_url = format!("{}{}", state.store.host_prefix(), code);

    match state.store.resolve_short(&short_url).await {
        Ok(Some(long_url)) => Redirect::temporary(&long_url).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "Short URL not found").into_response(),
        Err(e) => {
            tracing::error!(error = %e, short_code = %code, "failed to resolve redirect");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
        }
    }
}
