//! Infrastructure layer - framework implementations
//!
//! Database connection and migrations (db), configuration loading (config),
//! SeaORM repository implementations (repositories), demo seeding (seed),
//! and shared application state (state).

pub mod config;
pub mod db;
pub mod repositories;
pub mod seed;
pub mod state;

pub use repositories::*;
pub use state::AppState;
