use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;

use crate::{
    errors::Error,
    pkg::{internal::auth::Session, server::state::AppState},
    prelude::Result,
};

pub const SESSION_COOKIE: &str = "session";

/// Resolves the session cookie to a principal and attaches it to the
/// request. Anonymous requests never reach the guarded handlers; they are
/// bounced to the login entry point instead.
pub async fn authenticate(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response> {
    let jar = CookieJar::from_headers(&headers);
    if let Some(cookie) = jar.get(SESSION_COOKIE).filter(|c| !c.value().is_empty()) {
        if let Some(user) = Session::resolve(&state, cookie.value()).await? {
            request.extensions_mut().insert(Arc::new(user));
            return Ok(next.run(request).await);
        }
    }
    tracing::warn!("no session bound, authentication denied");
    Err(Error::Unauthenticated)
}
