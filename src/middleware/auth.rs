use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use subtle::ConstantTimeEq;

use crate::error::CatalogError;
use crate::router::CatalogState;

/// Ensure the inbound request carries the shared mutation secret.
/// Accepts only the query string form: `?secret=...`.
/// Comparison is constant-time.
pub fn ensure_authorized(state: &CatalogState, query: Option<&str>) -> Result<(), Response> {
    let expected = state.secret_pass.as_bytes();

    if let Some(qs) = query {
        for (k, v) in url::form_urlencoded::parse(qs.as_bytes()) {
            if k == "secret" && bool::from(v.as_bytes().ct_eq(expected)) {
                return Ok(());
            }
        }
    }

    Err(CatalogError::Forbidden.into_response())
}

/// Percent-encoded `secret=...` pair, for re-embedding the secret in form
/// actions and redirect targets.
pub fn secret_query(secret: &str) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair("secret", secret)
        .finish()
}

#[derive(Debug, Clone, Copy)]
pub struct RequireSecret;

impl FromRequestParts<CatalogState> for RequireSecret {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &CatalogState,
    ) -> Result<Self, Self::Rejection> {
        let query = parts.uri.query();
        ensure_authorized(state, query)?;
        Ok(Self)
    }
}
