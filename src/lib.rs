//! Thing API: a single-resource REST service over SQLite.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod server;
pub mod service;
pub mod state;
pub mod store;

pub use config::{AppConfig, Environment};
pub use error::{AppError, ConfigError};
pub use model::{Thing, ThingParams};
pub use routes::{app, common_routes_with_ready, thing_routes};
pub use server::serve;
pub use service::{valid_id, CrudService};
pub use state::AppState;
pub use store::ThingStore;
