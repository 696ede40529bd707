//! Handlers for the sample "items" resource.

use aide::axum::{routing::get_with, ApiRouter};
use aide::transform::TransformOperation;
use axum::{extract::Path, routing::get, Json};

use crate::http::types::ItemPath;
use crate::samples::{Record, ITEMS};

/// Tag grouping the item endpoints in the API documentation.
pub const TAG: &str = "items";

/// List the sample items.
///
/// # Returns
///
/// Returns the two fixed item records.
pub async fn list_items() -> Json<Vec<Record>> {
    Json(ITEMS.records())
}

/// Fetch a single item by id.
///
/// # Parameters
///
/// - `item_id` - Item identifier from the request path, any integer
///
/// # Returns
///
/// Returns a record echoing `item_id` with a synthesized name. There is no
/// existence check.
pub async fn get_item(Path(ItemPath { item_id }): Path<ItemPath>) -> Json<Record> {
    tracing::debug!(item_id, "serving sample item");
    Json(ITEMS.record(item_id))
}

fn list_items_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List items").description("Returns the sample item records.").tag(TAG)
}

fn get_item_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get item").description("Returns a sample item for any integer id.").tag(TAG)
}

/// Build the items endpoint group, relative to the API prefix.
pub fn router() -> ApiRouter {
    ApiRouter::new()
        .api_route("/items/", get_with(list_items, list_items_docs))
        // Slash-less alias, kept out of the documentation.
        .route("/items", get(list_items))
        .api_route("/items/{item_id}", get_with(get_item, get_item_docs))
}
