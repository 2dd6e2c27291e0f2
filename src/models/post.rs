use mongodb::bson::{oid::ObjectId, DateTime as BsonDateTime};
use serde::{Deserialize, Serialize};

/// Document stored in the `posts` collection
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub content: String,
    /// Username of the author, not an ObjectId reference
    pub author: String,
    pub tags: Vec<String>,
    pub is_published: bool,
    pub created_at: BsonDateTime,
    pub updated_at: BsonDateTime,
}
