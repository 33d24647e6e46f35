//! Services layer
//!
//! The catalog service (validation + orchestration) and the pure mapper it
//! composes with the repositories.

pub mod catalog;
pub mod mapper;

pub use catalog::CatalogService;
