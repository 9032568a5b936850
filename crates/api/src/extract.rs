//! Extractors that reject through [`AppError`]: the request body, accepting
//! both HTML form posts and JSON, and the numeric record id in the path.

use axum::extract::rejection::{FormRejection, JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::{Form, Json};
use portfolio_core::error::CoreError;
use portfolio_core::types::DbId;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Body of a create or update request.
///
/// `application/json` (and `+json` suffixed types) go through [`Json`];
/// everything else is parsed as `application/x-www-form-urlencoded`.
#[derive(Debug, Clone)]
pub struct Payload<T>(pub T);

impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_json(req.headers()) {
            Json::<T>::from_request(req, state)
                .await
                .map(|Json(value)| Payload(value))
                .map_err(json_rejection)
        } else {
            Form::<T>::from_request(req, state)
                .await
                .map(|Form(value)| Payload(value))
                .map_err(form_rejection)
        }
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || essence.ends_with("+json")
}

fn json_rejection(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonDataError(err) => CoreError::Validation(err.body_text()).into(),
        other => AppError::BadRequest(other.body_text()),
    }
}

fn form_rejection(rejection: FormRejection) -> AppError {
    match rejection {
        FormRejection::InvalidFormContentType(err) => {
            AppError::UnsupportedMediaType(err.body_text())
        }
        FormRejection::FailedToDeserializeFormBody(err) => {
            CoreError::Validation(err.body_text()).into()
        }
        other => AppError::BadRequest(other.body_text()),
    }
}

/// Record id taken from the route's `{id}` segment.
#[derive(Debug, Clone, Copy)]
pub struct Id(pub DbId);

impl<S: Send + Sync> FromRequestParts<S> for Id {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<DbId>::from_request_parts(parts, state)
            .await
            .map(|Path(id)| Id(id))
            .map_err(path_rejection)
    }
}

fn path_rejection(rejection: PathRejection) -> AppError {
    match rejection {
        PathRejection::FailedToDeserializePathParams(err) => AppError::BadRequest(err.body_text()),
        // The route has no `{id}` segment at all.
        other => AppError::InternalError(other.body_text()),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers(content_type: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_str(content_type).unwrap());
        headers
    }

    #[test]
    fn json_content_types() {
        assert!(is_json(&headers("application/json")));
        assert!(is_json(&headers("Application/JSON; charset=utf-8")));
        assert!(is_json(&headers("application/merge-patch+json")));
    }

    #[test]
    fn form_and_missing_content_types() {
        assert!(!is_json(&headers("application/x-www-form-urlencoded")));
        assert!(!is_json(&headers("text/plain")));
        assert!(!is_json(&HeaderMap::new()));
    }

    #[tokio::test]
    async fn id_outside_an_id_route_is_a_server_error() {
        let (mut parts, ()) = axum::http::Request::new(()).into_parts();
        let err = Id::from_request_parts(&mut parts, &()).await.unwrap_err();
        assert!(matches!(err, AppError::InternalError(_)));
    }
}
