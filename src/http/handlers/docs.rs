//! OpenAPI document and Swagger UI handlers.

use std::sync::Arc;

use aide::openapi::OpenApi;
use axum::{
    response::{IntoResponse, Response},
    Extension, Json,
};

use crate::config::ServiceInfo;

/// Path the generated OpenAPI document is served from.
pub const OPENAPI_PATH: &str = "/openapi.json";
/// Path of the interactive Swagger UI.
pub const DOCS_PATH: &str = "/docs";

/// Create an empty OpenAPI document carrying the service metadata.
///
/// Paths are filled in later by `ApiRouter::finish_api`.
pub fn base_openapi(info: &ServiceInfo) -> OpenApi {
    let mut api = OpenApi::default();
    api.info.title = info.title.clone();
    api.info.description = Some(info.description.clone());
    api.info.version = info.version.clone();
    api
}

/// Serve the finished OpenAPI document.
pub async fn serve_openapi(Extension(api): Extension<Arc<OpenApi>>) -> Response {
    Json(api.as_ref()).into_response()
}
