//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! DTOs accept both urlencoded form bodies and JSON, so non-string fields go
//! through the lenient deserializers in [`portfolio_core::form`].

pub mod blob;
pub mod project;
