//! Static sample data served by the resource endpoints.
//!
//! Nothing here is stored: each call builds fresh records from a fixed
//! name prefix, so any id is accepted and echoed back.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single sample record as returned over the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct Record {
    /// Record identifier, echoed from the request when fetched by id.
    pub id: i64,
    /// Display name synthesized from the resource prefix and the id.
    pub name: String,
}

/// A fictitious resource that synthesizes its records on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleResource {
    prefix: &'static str,
}

/// Sample "items" resource.
pub const ITEMS: SampleResource = SampleResource::new("示例项目");

/// Sample "users" resource.
pub const USERS: SampleResource = SampleResource::new("示例用户");

/// Ids returned by the collection endpoints.
const LISTED_IDS: [i64; 2] = [1, 2];

impl SampleResource {
    /// Create a resource whose record names start with `prefix`.
    pub const fn new(prefix: &'static str) -> Self {
        Self { prefix }
    }

    /// Build the record for `id`.
    pub fn record(&self, id: i64) -> Record {
        Record { id, name: format!("{}{id}", self.prefix) }
    }

    /// Build the fixed collection listing.
    pub fn records(&self) -> Vec<Record> {
        LISTED_IDS.iter().map(|&id| self.record(id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_are_fixed() {
        let items = ITEMS.records();
        assert_eq!(
            items,
            vec![
                Record { id: 1, name: "示例项目1".to_string() },
                Record { id: 2, name: "示例项目2".to_string() },
            ]
        );
        // Listing twice yields the same data.
        assert_eq!(ITEMS.records(), items);

        let users = USERS.records();
        assert_eq!(users[0].name, "示例用户1");
        assert_eq!(users[1].name, "示例用户2");
    }

    /// Test that any id is echoed, including zero, negatives and the extremes.
    #[test]
    fn test_record_echoes_id() {
        for id in [0, -1, 42, i64::MIN, i64::MAX] {
            let item = ITEMS.record(id);
            assert_eq!(item.id, id);
            assert_eq!(item.name, format!("示例项目{id}"));

            let user = USERS.record(id);
            assert_eq!(user.id, id);
            assert_eq!(user.name, format!("示例用户{id}"));
        }
    }

    #[test]
    fn test_record_serialization() {
        let json = serde_json::to_value(ITEMS.record(-7)).expect("valid structure");
        assert_eq!(json, serde_json::json!({"id": -7, "name": "示例项目-7"}));
    }
}
