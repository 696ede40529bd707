//! # Scaffold API Library
//!
//! A minimal HTTP API scaffold serving static sample data.
//!
//! This library provides components for:
//! - **Resource Endpoints**: read-only "items" and "users" groups under `/api/v1`
//! - **Service Endpoints**: a welcome message at `/` and a health probe at `/health`
//! - **API Documentation**: a generated OpenAPI document and Swagger UI carrying
//!   the configured service metadata
//!
//! # Examples
//!
//! ```no_run
//! use scaffold_api::{http::build_router, ServiceInfo};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let state = scaffold_api::http::AppState::builder()
//!     .with_info(ServiceInfo::default())
//!     .build()?;
//! let app = build_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod http;
pub mod samples;

// Re-export commonly used types for convenience
pub use config::{ConfigError, ServiceInfo};
pub use samples::{Record, SampleResource, ITEMS, USERS};
