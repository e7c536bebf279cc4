use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Query, Request, State},
    http::Method,
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::{error::AppError, state::AppState};

pub const AUTH_QUERY_PARAM: &str = "auth";

/// Rejects requests that carry neither a matching `auth` query parameter nor
/// a matching token header. Preflight requests pass through.
pub async fn require_token(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if request.method() == Method::OPTIONS {
        return Ok(next.run(request).await);
    }

    let expected = state.config.api_auth.as_str();
    let from_query = Query::<HashMap<String, String>>::try_from_uri(request.uri())
        .ok()
        .and_then(|Query(params)| params.get(AUTH_QUERY_PARAM).cloned());
    let from_header = request
        .headers()
        .get(state.config.token_header.as_str())
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let authorized = [from_query, from_header]
        .into_iter()
        .flatten()
        .any(|token| token == expected);
    if !authorized {
        debug!(path = %request.uri().path(), "rejected request without a valid token");
        return Err(AppError::Unauthorized);
    }

    Ok(next.run(request).await)
}
