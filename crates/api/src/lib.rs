//! Portfolio API server library.
//!
//! Serves the `blobs` and `projects` resources as HTML pages or JSON
//! documents depending on the client's `Accept` header. Exposes the
//! building blocks (config, state, error handling, routes) so integration
//! tests and the binary entrypoint can both access them.

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod negotiate;
pub mod response;
pub mod routes;
pub mod state;
pub mod views;
