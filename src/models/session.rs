use mongodb::bson::{oid::ObjectId, DateTime as BsonDateTime};
use serde::{Deserialize, Serialize};

/// Document stored in the `sessions` collection.
///
/// The bootstrap never writes sessions, only the TTL checks do; the index
/// on `expiresAt` removes each one once its expiry has passed.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: String,
    pub token: String,
    pub expires_at: BsonDateTime,
    pub created_at: BsonDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn test_fields_are_camel_case() {
        let now = BsonDateTime::now();
        let session = Session {
            id: None,
            user_id: "admin".to_string(),
            token: "abc".to_string(),
            expires_at: now,
            created_at: now,
        };
        let doc = bson::to_document(&session).unwrap();

        assert!(doc.contains_key("expiresAt"));
        assert!(doc.contains_key("userId"));
        assert!(!doc.contains_key("_id"));
    }
}
