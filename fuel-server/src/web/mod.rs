//! Web layer for the fuel station registry.
//!
//! Provides the JSON API, the HTML dashboard and the price-change form.
//! Handlers only marshal requests into registry calls.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
