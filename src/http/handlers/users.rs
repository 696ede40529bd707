//! Handlers for the sample "users" resource.

use aide::axum::{routing::get_with, ApiRouter};
use aide::transform::TransformOperation;
use axum::{extract::Path, routing::get, Json};

use crate::http::types::UserPath;
use crate::samples::{Record, USERS};

/// Tag grouping the user endpoints in the API documentation.
pub const TAG: &str = "users";

/// List the sample users.
///
/// # Returns
///
/// Returns the two fixed user records.
pub async fn list_users() -> Json<Vec<Record>> {
    Json(USERS.records())
}

/// Fetch a single user by id.
///
/// # Parameters
///
/// - `user_id` - User identifier from the request path, any integer
///
/// # Returns
///
/// Returns a record echoing `user_id` with a synthesized name. There is no
/// existence check.
pub async fn get_user(Path(UserPath { user_id }): Path<UserPath>) -> Json<Record> {
    tracing::debug!(user_id, "serving sample user");
    Json(USERS.record(user_id))
}

fn list_users_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List users").description("Returns the sample user records.").tag(TAG)
}

fn get_user_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get user").description("Returns a sample user for any integer id.").tag(TAG)
}

/// Build the users endpoint group, relative to the API prefix.
pub fn router() -> ApiRouter {
    ApiRouter::new()
        .api_route("/users/", get_with(list_users, list_users_docs))
        // Slash-less alias, kept out of the documentation.
        .route("/users", get(list_users))
        .api_route("/users/{user_id}", get_with(get_user, get_user_docs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_users() {
        let Json(records) = list_users().await;
        let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(records[0].name, "示例用户1");
        assert_eq!(records[1].name, "示例用户2");
    }

    #[tokio::test]
    async fn test_router_is_stateless() {
        let app: axum::Router = router().finish_api(&mut aide::openapi::OpenApi::default());
        let server = axum_test::TestServer::new(app).expect("build test server");

        let records: Vec<Record> = server.get("/users").await.json();
        assert_eq!(records, USERS.records());
    }

    #[tokio::test]
    async fn test_get_user() {
        for user_id in [7, 0, -1] {
            let Json(record) = get_user(Path(UserPath { user_id })).await;
            assert_eq!(record, USERS.record(user_id));
            assert_eq!(record.name, format!("示例用户{user_id}"));
        }
    }
}
