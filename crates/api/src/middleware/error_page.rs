//! HTML rendering of error responses.
//!
//! [`AppError`](crate::error::AppError) always answers with a JSON body and
//! tags the response with an [`ErrorPage`] extension. When the client
//! negotiated HTML, this middleware swaps the body for a rendered error page
//! while keeping the status code.

use askama::Template;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{Html, IntoResponse, Response};

use crate::error::ErrorPage;
use crate::negotiate::Format;
use crate::views::ErrorView;

pub async fn render_error_pages(request: Request, next: Next) -> Response {
    let format = Format::from_headers(request.headers());
    let response = next.run(request).await;

    if format != Some(Format::Html) {
        return response;
    }
    let Some(page) = response.extensions().get::<ErrorPage>().cloned() else {
        return response;
    };

    let status = response.status();
    match ErrorView::new(status, page.message).render() {
        Ok(body) => (status, Html(body)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Failed to render error page");
            response
        }
    }
}
