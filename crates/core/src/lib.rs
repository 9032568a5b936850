//! Shared domain types for the portfolio service.
//!
//! Kept free of HTTP and database concerns so both the repository layer and
//! the API server can depend on it.

pub mod error;
pub mod form;
pub mod types;
