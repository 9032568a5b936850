//! Route handlers, one module per resource.
//!
//! Every handler negotiates a [`Format`](crate::negotiate::Format): HTML
//! clients get rendered pages and redirects, JSON clients get the documents.

pub mod blob;
pub mod project;
