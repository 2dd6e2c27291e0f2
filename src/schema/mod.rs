//! Declarative collection and index layout.
//!
//! The order of [`index_specs`] is the order indexes are created in.

use mongodb::bson::{Bson, Document};
use mongodb::options::IndexOptions;
use mongodb::IndexModel;
use serde::Serialize;
use std::time::Duration;

pub const USERS: &str = "users";
pub const POSTS: &str = "posts";
pub const SESSIONS: &str = "sessions";

/// Collections created by the bootstrap, in creation order
pub const COLLECTIONS: [&str; 3] = [USERS, POSTS, SESSIONS];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexKind {
    Ascending,
    Descending,
    Text,
}

impl IndexKind {
    fn to_bson(self) -> Bson {
        match self {
            IndexKind::Ascending => Bson::Int32(1),
            IndexKind::Descending => Bson::Int32(-1),
            IndexKind::Text => Bson::String("text".to_string()),
        }
    }

    /// Suffix the server uses when naming an index
    fn name_suffix(self) -> &'static str {
        match self {
            IndexKind::Ascending => "1",
            IndexKind::Descending => "-1",
            IndexKind::Text => "text",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexSpec {
    pub collection: &'static str,
    pub keys: Vec<(&'static str, IndexKind)>,
    pub unique: bool,
    /// TTL grace period; `Some(0)` expires exactly at the stored timestamp
    pub expire_after_secs: Option<u64>,
}

impl IndexSpec {
    fn new(collection: &'static str, keys: Vec<(&'static str, IndexKind)>) -> Self {
        Self {
            collection,
            keys,
            unique: false,
            expire_after_secs: None,
        }
    }

    fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    fn expire_after(mut self, secs: u64) -> Self {
        self.expire_after_secs = Some(secs);
        self
    }

    pub fn keys_document(&self) -> Document {
        let mut keys = Document::new();
        for (field, kind) in &self.keys {
            keys.insert(*field, kind.to_bson());
        }
        keys
    }

    /// Default index name the server assigns, e.g. `createdAt_-1`
    pub fn name(&self) -> String {
        self.keys
            .iter()
            .map(|(field, kind)| format!("{}_{}", field, kind.name_suffix()))
            .collect::<Vec<_>>()
            .join("_")
    }

    /// Short label for logs, e.g. `posts(title, content)`
    pub fn describe(&self) -> String {
        let fields: Vec<&str> = self.keys.iter().map(|(field, _)| *field).collect();
        format!("{}({})", self.collection, fields.join(", "))
    }

    /// Index model named explicitly so reruns report the same name
    pub fn to_index_model(&self) -> IndexModel {
        let options = IndexOptions::builder()
            .name(self.name())
            .unique(self.unique.then_some(true))
            .expire_after(self.expire_after_secs.map(Duration::from_secs))
            .build();

        IndexModel::builder()
            .keys(self.keys_document())
            .options(options)
            .build()
    }
}

pub fn index_specs() -> Vec<IndexSpec> {
    use IndexKind::*;

    vec![
        IndexSpec::new(USERS, vec![("email", Ascending)]).unique(),
        IndexSpec::new(USERS, vec![("username", Ascending)]).unique(),
        IndexSpec::new(USERS, vec![("createdAt", Ascending)]),
        IndexSpec::new(POSTS, vec![("author", Ascending)]),
        IndexSpec::new(POSTS, vec![("createdAt", Descending)]),
        IndexSpec::new(POSTS, vec![("title", Text), ("content", Text)]),
        IndexSpec::new(SESSIONS, vec![("expiresAt", Ascending)]).expire_after(0),
    ]
}
