//! HTTP server exposing the sample resources and their API documentation.

pub mod handlers;
pub mod routes;
pub mod state;
pub mod types;

pub use routes::{build_router, API_PREFIX};
pub use state::AppState;
