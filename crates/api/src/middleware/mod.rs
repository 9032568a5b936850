//! Request/response middleware installed around the router.
//!
//! - [`method_override::method_override`] -- Lets HTML forms issue PUT/PATCH/DELETE via `_method`.
//! - [`error_page::render_error_pages`] -- Renders error responses as HTML for browsers.

pub mod error_page;
pub mod method_override;
