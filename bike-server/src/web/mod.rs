//! Web layer: router, handlers, templates, and DTOs.

pub mod dto;
mod routes;
mod state;
mod templates;

pub use routes::create_router;
pub use state::{AppState, MapConfig};
