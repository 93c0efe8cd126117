// Library Crate Root
// lib.rs

// main.rs and the integration tests both go through this public API
pub mod api;
pub mod config;
pub mod models;
pub mod store;

// pub use = re-export at crate root
pub use api::{create_router, AppState};
pub use config::{ConfigError, ServerConfig};
pub use models::{Stock, Trade};
pub use store::{Catalog, Ledger, MarketError, MarketStore};
