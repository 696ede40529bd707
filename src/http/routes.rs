//! HTTP routing configuration for all API endpoints.

use std::sync::Arc;

use aide::axum::{routing::get_with, ApiRouter};
use aide::swagger::Swagger;
use axum::{routing::get, Extension, Router};

use crate::http::handlers::docs::{base_openapi, DOCS_PATH, OPENAPI_PATH};
use crate::http::handlers::health::health_check_docs;
use crate::http::handlers::root::root_docs;
use crate::http::handlers::*;
use crate::http::state::AppState;

/// Prefix shared by the resource endpoint groups.
pub const API_PREFIX: &str = "/api/v1";

/// Build the Axum router with all API endpoints.
///
/// # Parameters
///
/// - `state` - Application state carrying the service metadata; it only seeds
///   the OpenAPI document, no handler extracts it
///
/// # Returns
///
/// Returns configured Axum `Router` with the resource groups mounted under
/// [`API_PREFIX`], the root and health endpoints, and the API documentation.
pub fn build_router(state: AppState) -> Router {
    let mut api = base_openapi(&state.info);

    let app: Router = ApiRouter::new()
        .api_route("/", get_with(root, root_docs))
        .api_route("/health", get_with(health_check, health_check_docs))
        .nest(API_PREFIX, api_v1())
        // Documentation
        .route(OPENAPI_PATH, get(serve_openapi))
        .route(DOCS_PATH, Swagger::new(OPENAPI_PATH).axum_route())
        .finish_api(&mut api);

    app.layer(Extension(Arc::new(api)))
}

/// Resource endpoint groups, relative to [`API_PREFIX`].
fn api_v1() -> ApiRouter {
    ApiRouter::new().merge(items::router()).merge(users::router())
}
