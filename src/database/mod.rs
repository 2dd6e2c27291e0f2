use crate::bootstrap::ProvisioningTarget;
use crate::models::{AppUser, Post, User};
use crate::schema::{IndexSpec, POSTS, USERS};
use crate::utils::{error_code, is_duplicate_key, AppError, NAMESPACE_EXISTS, USER_ALREADY_EXISTS};
use async_trait::async_trait;
use mongodb::bson::{doc, Document};
use mongodb::{options::ClientOptions, Client, Collection, Database};
use serde::Serialize;
use std::time::Duration;

const APP_NAME: &str = "mongo-bootstrap";

/// MongoDB connection used for provisioning
#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    /// Connect with administrative credentials and verify the server answers.
    ///
    /// Operations target `admin` until [`ProvisioningTarget::select_database`]
    /// switches to the application database.
    pub async fn connect(uri: &str) -> Result<Self, AppError> {
        let mut client_options = ClientOptions::parse(uri)
            .await
            .map_err(|e| AppError::Config(format!("invalid MONGODB_URI: {}", e)))?;

        client_options.app_name = Some(APP_NAME.to_string());
        client_options.connect_timeout = Some(Duration::from_secs(5));
        client_options.server_selection_timeout = Some(Duration::from_secs(5));

        let client = Client::with_options(client_options)?;
        let db = client.database("admin");

        // Creating the client doesn't connect, ping to fail fast
        db.run_command(doc! { "ping": 1 }).await?;
        log::info!("✅ MongoDB connected successfully");

        Ok(Self { client, db })
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    #[cfg(test)]
    pub fn database(&self) -> &Database {
        &self.db
    }

    async fn insert<T>(&self, collection: &str, document: &T) -> Result<(), AppError>
    where
        T: Serialize + Send + Sync,
    {
        match self.collection::<T>(collection).insert_one(document).await {
            Ok(_) => Ok(()),
            Err(e) if is_duplicate_key(&e) => Err(AppError::DuplicateKey {
                collection: collection.to_string(),
                source: e,
            }),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl ProvisioningTarget for MongoDB {
    fn select_database(&mut self, name: &str) {
        self.db = self.client.database(name);
    }

    async fn create_user(&self, user: &AppUser) -> Result<(), AppError> {
        match self.db.run_command(user.create_command()).await {
            Ok(_) => Ok(()),
            Err(e) if error_code(&e) == Some(USER_ALREADY_EXISTS) => {
                Err(AppError::DuplicateUser {
                    user: user.user.clone(),
                    source: e,
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn create_collection(&self, name: &str) -> Result<bool, AppError> {
        match self.db.create_collection(name).await {
            Ok(()) => Ok(true),
            Err(e) if error_code(&e) == Some(NAMESPACE_EXISTS) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn create_index(&self, spec: &IndexSpec) -> Result<String, AppError> {
        let result = self
            .collection::<Document>(spec.collection)
            .create_index(spec.to_index_model())
            .await?;
        Ok(result.index_name)
    }

    async fn insert_user(&self, user: &User) -> Result<(), AppError> {
        self.insert(USERS, user).await
    }

    async fn insert_post(&self, post: &Post) -> Result<(), AppError> {
        self.insert(POSTS, post).await
    }
}
