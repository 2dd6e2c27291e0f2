use mongodb::bson::{doc, Document};
use serde::Serialize;

/// Role granted to the application user on its database
pub const READ_WRITE_ROLE: &str = "readWrite";

/// A single `{ role, db }` grant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleGrant {
    pub role: String,
    pub db: String,
}

/// Credential registered with `createUser` on the target database
#[derive(Clone, Serialize)]
pub struct AppUser {
    pub user: String,
    #[serde(skip_serializing)]
    pub pwd: String,
    pub roles: Vec<RoleGrant>,
}

impl AppUser {
    /// Read-write user scoped to `database`
    pub fn read_write(user: &str, pwd: &str, database: &str) -> Self {
        Self {
            user: user.to_string(),
            pwd: pwd.to_string(),
            roles: vec![RoleGrant {
                role: READ_WRITE_ROLE.to_string(),
                db: database.to_string(),
            }],
        }
    }

    /// `createUser` command document
    pub fn create_command(&self) -> Document {
        let roles: Vec<Document> = self
            .roles
            .iter()
            .map(|grant| doc! { "role": &grant.role, "db": &grant.db })
            .collect();

        doc! {
            "createUser": &self.user,
            "pwd": &self.pwd,
            "roles": roles,
        }
    }
}

impl std::fmt::Debug for AppUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppUser")
            .field("user", &self.user)
            .field("pwd", &"<redacted>")
            .field("roles", &self.roles)
            .finish()
    }
}
