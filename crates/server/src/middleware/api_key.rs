use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use shared::{
    domain::{ResponseStatus, WebResponse},
    state::AppState,
};
use subtle::ConstantTimeEq;
use tracing::warn;

pub const API_KEY_HEADER: &str = "X-API-Key";

fn is_authorized(provided: Option<&[u8]>, expected: &str) -> bool {
    match provided {
        Some(key) => key.ct_eq(expected.as_bytes()).into(),
        None => false,
    }
}

/// Rejects any request whose `X-API-Key` header does not match the configured key.
pub async fn auth(State(data): State<Arc<AppState>>, req: Request<Body>, next: Next) -> Response {
    let provided = req
        .headers()
        .get(API_KEY_HEADER)
        .map(|value| value.as_bytes());

    if !is_authorized(provided, &data.api_key) {
        warn!(
            "Rejected unauthenticated request: {} {}",
            req.method(),
            req.uri().path()
        );

        return WebResponse::new(ResponseStatus::Unauthorized, ()).into_response();
    }

    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(key: Option<&str>) -> bool {
        is_authorized(key.map(str::as_bytes), "RAHASIA")
    }

    #[test]
    fn only_exact_key_is_accepted() {
        assert!(check(Some("RAHASIA")));

        assert!(!check(None));
        assert!(!check(Some("")));
        assert!(!check(Some("rahasia")));
        assert!(!check(Some("RAHASIA ")));
        assert!(!check(Some("RAHAS")));
    }
}
