//! Welcome handler served at the service root.

use aide::transform::TransformOperation;
use axum::Json;

use crate::http::types::Message;

/// Fixed welcome text.
pub const WELCOME_MESSAGE: &str = "欢迎使用 FastAPI 模板项目！";

/// Root endpoint.
pub async fn root() -> Json<Message> {
    Json(Message { message: WELCOME_MESSAGE.to_string() })
}

pub(crate) fn root_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Welcome message")
}

#[cfg(test)]
mod tests {
    use axum::response::IntoResponse;

    use super::*;

    #[tokio::test]
    async fn test_root() {
        let response = root().await.into_response();
        assert_eq!(response.status(), axum::http::StatusCode::OK);

        let (_, body) = response.into_parts();
        let body_bytes = axum::body::to_bytes(body, usize::MAX).await.expect("read body");
        let json: serde_json::Value = serde_json::from_slice(&body_bytes).expect("parse JSON");
        assert_eq!(json, serde_json::json!({"message": "欢迎使用 FastAPI 模板项目！"}));
    }
}
