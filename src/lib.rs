//! Bakery API: read-only JSON endpoints over bakeries and their baked goods.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError, StartupError};
pub use models::{BakedGood, Bakery, NewBakedGood};
pub use routes::{api_routes, app, common_routes};
pub use service::{BakedGoodService, BakeryService};
pub use state::AppState;
pub use store::{connect, ensure_tables, seed_sample_data};
