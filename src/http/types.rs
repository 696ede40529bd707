//! API types and path parameters for HTTP handlers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Path parameters for `/api/v1/items/{item_id}`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ItemPath {
    /// Item identifier
    pub item_id: i64,
}

/// Path parameters for `/api/v1/users/{user_id}`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UserPath {
    /// User identifier
    pub user_id: i64,
}

/// Welcome message returned by `/`.
#[derive(Debug, Serialize, JsonSchema)]
pub struct Message {
    pub message: String,
}

/// Health probe response returned by `/health`.
#[derive(Debug, Serialize, JsonSchema)]
pub struct HealthStatus {
    /// Always "healthy"
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_path_deserialization() {
        let json = r#"{"item_id": -3}"#;
        let params: ItemPath = serde_json::from_str(json).expect("valid JSON");
        assert_eq!(params.item_id, -3);
    }

    #[test]
    fn test_user_path_rejects_non_integer() {
        let json = r#"{"user_id": "abc"}"#;
        assert!(serde_json::from_str::<UserPath>(json).is_err());
    }

    /// Test HealthStatus serialization.
    #[test]
    fn test_health_status_serialization() {
        let status = HealthStatus { status: "healthy".to_string() };
        let json = serde_json::to_string(&status).expect("valid structure");
        assert_eq!(json, r#"{"status":"healthy"}"#);
    }
}
