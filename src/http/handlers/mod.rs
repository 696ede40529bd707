//! HTTP handlers for the service endpoints.

pub mod docs;
pub mod health;
pub mod items;
pub mod root;
pub mod users;

// Re-export handlers for easier access
pub use docs::serve_openapi;
pub use health::health_check;
pub use items::{get_item, list_items};
pub use root::root;
pub use users::{get_user, list_users};
