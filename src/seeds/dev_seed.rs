use crate::models::{Post, User};
use mongodb::bson::DateTime as BsonDateTime;
use serde::Serialize;

/// bcrypt hash of `admin123`
pub const ADMIN_PASSWORD_HASH: &str =
    "$2b$12$LQv3c1yqBWVHxkd0LHAkCOYz6TtxMQJqhN8/LewdBPj6ukx.LrUpm";

pub const ADMIN_USERNAME: &str = "admin";
pub const WELCOME_POST_TITLE: &str = "Welcome to MERN Stack";

/// Sample documents inserted in development mode
#[derive(Debug, Clone, Serialize)]
pub struct SeedData {
    pub user: User,
    pub post: Post,
}

impl SeedData {
    pub fn document_count(&self) -> usize {
        2
    }
}

/// Builds the admin user and its welcome post, both stamped with `now`
pub fn build_seed_data(now: BsonDateTime) -> SeedData {
    let user = User {
        id: None,
        username: ADMIN_USERNAME.into(),
        email: "admin@example.com".into(),
        password: ADMIN_PASSWORD_HASH.into(),
        role: "admin".into(),
        is_active: true,
        created_at: now,
        updated_at: now,
    };

    let post = Post {
        id: None,
        title: WELCOME_POST_TITLE.into(),
        content: "This is a sample post created during MongoDB initialization.".into(),
        author: user.username.clone(),
        tags: ["mern", "mongodb", "express", "react", "nodejs"]
            .iter()
            .map(|tag| tag.to_string())
            .collect(),
        is_published: true,
        created_at: now,
        updated_at: now,
    };

    SeedData { user, post }
}
