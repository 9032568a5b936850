//! HTTP method override for HTML forms.
//!
//! Browsers can only submit forms with GET or POST. A urlencoded POST body
//! carrying `_method=PUT` (or `PATCH`/`DELETE`) is rewritten into that
//! method before routing, and the `_method` field is removed from the body.
//!
//! This must wrap the router itself: layers added with `Router::layer` run
//! after a route has already been matched.

use axum::body::{Body, Bytes};
use axum::extract::Request;
use axum::http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderMap, Method};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use http_body_util::LengthLimitError;

use crate::error::AppError;

/// Body field holding the overriding method.
pub const OVERRIDE_FIELD: &str = "_method";

/// Upper bound on form bodies buffered for inspection.
pub const MAX_FORM_BYTES: usize = 1024 * 1024;

pub async fn method_override(request: Request, next: Next) -> Response {
    if request.method() != Method::POST || !is_urlencoded(request.headers()) {
        return next.run(request).await;
    }

    let (mut parts, body) = request.into_parts();
    let bytes = match axum::body::to_bytes(body, MAX_FORM_BYTES).await {
        Ok(bytes) => bytes,
        Err(err) => {
            let too_large = err
                .into_inner()
                .downcast_ref::<LengthLimitError>()
                .is_some();
            return if too_large {
                AppError::PayloadTooLarge.into_response()
            } else {
                AppError::BadRequest("Failed to read request body".into()).into_response()
            };
        }
    };

    let Some((method, remaining)) = take_override(&bytes) else {
        return next.run(Request::from_parts(parts, Body::from(bytes))).await;
    };

    if let Some(method) = method {
        tracing::debug!(from = %parts.method, to = %method, uri = %parts.uri, "Method override");
        parts.method = method;
    }
    parts.headers.remove(CONTENT_LENGTH);

    next.run(Request::from_parts(parts, Body::from(remaining)))
        .await
}

fn is_urlencoded(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| ct.split(';').next())
        .is_some_and(|essence| {
            essence
                .trim()
                .eq_ignore_ascii_case("application/x-www-form-urlencoded")
        })
}

/// Strip every `_method` field from a urlencoded body.
///
/// Returns `None` when the body has no such field (or is not valid
/// urlencoded data), leaving it for the handler to deal with. Otherwise
/// returns the requested method, if it is one that may be overridden, and
/// the re-encoded remainder of the body.
fn take_override(body: &Bytes) -> Option<(Option<Method>, String)> {
    let mut pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(body).ok()?;
    let value = pairs
        .iter()
        .find(|(key, _)| key == OVERRIDE_FIELD)
        .map(|(_, value)| value.clone())?;
    pairs.retain(|(key, _)| key != OVERRIDE_FIELD);

    let remaining = serde_urlencoded::to_string(&pairs).ok()?;
    Some((override_target(&value), remaining))
}

fn override_target(value: &str) -> Option<Method> {
    match value.trim().to_ascii_uppercase().as_str() {
        "PUT" => Some(Method::PUT),
        "PATCH" => Some(Method::PATCH),
        "DELETE" => Some(Method::DELETE),
        _ => None,
    }
}
