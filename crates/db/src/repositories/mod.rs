//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod blob_repo;
pub mod project_repo;

pub use blob_repo::BlobRepo;
pub use project_repo::ProjectRepo;
