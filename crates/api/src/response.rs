//! Shared response bodies for API handlers.

use serde::Serialize;

/// Confirmation returned to JSON clients after a delete.
///
/// ```json
/// { "message": "deleted", "item": { ... } }
/// ```
#[derive(Debug, Serialize)]
pub struct Deleted<T: Serialize> {
    pub message: &'static str,
    pub item: T,
}

impl<T: Serialize> Deleted<T> {
    pub fn new(item: T) -> Self {
        Self {
            message: "deleted",
            item,
        }
    }
}
