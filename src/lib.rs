pub mod api;
pub mod config;
pub mod logic;
pub mod model;
pub mod seed;
pub mod store;
pub mod views;

// Export API types
pub use api::handlers;
pub use api::routes;

// Export all model types
pub use model::*;

// Export store types
pub use store::{CatalogStore, MemoryStore, PostgresStore};
