//! One-time provisioning sequence.
//!
//! [`ProvisioningPlan`] holds the desired state as plain data and [`apply`]
//! performs it step by step against a [`ProvisioningTarget`]. The first
//! error aborts the run; nothing is retried or rolled back.

use crate::config::BootstrapConfig;
use crate::models::{AppUser, Post, User};
use crate::schema::{self, IndexSpec};
use crate::seeds::{build_seed_data, SeedData};
use crate::utils::AppError;
use async_trait::async_trait;
use mongodb::bson::DateTime as BsonDateTime;
use serde::Serialize;

pub const START_BANNER: &str = "Starting MongoDB initialization...";
pub const SEED_BANNER: &str = "Inserting sample data for development...";
pub const DONE_BANNER: &str = "MongoDB initialization completed successfully!";

/// Everything the bootstrap will create
#[derive(Debug, Clone, Serialize)]
pub struct ProvisioningPlan {
    pub database: String,
    pub app_user: AppUser,
    pub collections: Vec<&'static str>,
    pub indexes: Vec<IndexSpec>,
    /// Present only in development
    pub seed: Option<SeedData>,
}

impl ProvisioningPlan {
    pub fn from_config(config: &BootstrapConfig) -> Self {
        Self::from_config_at(config, BsonDateTime::now())
    }

    pub fn from_config_at(config: &BootstrapConfig, now: BsonDateTime) -> Self {
        let seed = config.is_development().then(|| build_seed_data(now));

        Self {
            database: config.database.clone(),
            app_user: AppUser::read_write(
                &config.app_username,
                &config.app_password,
                &config.database,
            ),
            collections: schema::COLLECTIONS.to_vec(),
            indexes: schema::index_specs(),
            seed,
        }
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProvisioningReport {
    pub database: String,
    pub user: String,
    pub collections_created: Vec<String>,
    pub indexes_created: Vec<String>,
    pub seeded_documents: usize,
}

/// Database operations the bootstrap issues
#[async_trait]
pub trait ProvisioningTarget: Send + Sync {
    /// Point every following operation at `name`
    fn select_database(&mut self, name: &str);

    async fn create_user(&self, user: &AppUser) -> Result<(), AppError>;

    /// Returns `false` when the collection already existed
    async fn create_collection(&self, name: &str) -> Result<bool, AppError>;

    /// Returns the name of the created index
    async fn create_index(&self, spec: &IndexSpec) -> Result<String, AppError>;

    async fn insert_user(&self, user: &User) -> Result<(), AppError>;

    async fn insert_post(&self, post: &Post) -> Result<(), AppError>;
}

pub async fn apply<T>(plan: &ProvisioningPlan, target: &mut T) -> Result<ProvisioningReport, AppError>
where
    T: ProvisioningTarget + ?Sized,
{
    log::info!("{}", START_BANNER);
    if log::log_enabled!(log::Level::Debug) {
        if let Ok(summary) = serde_json::to_string_pretty(plan) {
            log::debug!("Provisioning plan:\n{}", summary);
        }
    }

    target.select_database(&plan.database);
    log::info!("📊 Using database: {}", plan.database);

    let mut report = ProvisioningReport {
        database: plan.database.clone(),
        ..Default::default()
    };

    target.create_user(&plan.app_user).await?;
    log::info!(
        "   ✅ User created: {} (readWrite on {})",
        plan.app_user.user,
        plan.database
    );
    report.user = plan.app_user.user.clone();

    for name in &plan.collections {
        if target.create_collection(name).await? {
            log::info!("   ✅ Collection created: {}", name);
            report.collections_created.push(name.to_string());
        } else {
            log::debug!("   ℹ️  Collection already exists: {}", name);
        }
    }

    log::info!("🔧 Creating database indexes...");
    for spec in &plan.indexes {
        let index_name = target.create_index(spec).await?;
        log::info!("   ✅ Index created: {} [{}]", spec.describe(), index_name);
        report.indexes_created.push(index_name);
    }

    if let Some(seed) = &plan.seed {
        log::info!("{}", SEED_BANNER);
        target.insert_user(&seed.user).await?;
        log::info!("   ✅ Seed user inserted: {}", seed.user.username);
        target.insert_post(&seed.post).await?;
        log::info!("   ✅ Seed post inserted: {}", seed.post.title);
        report.seeded_documents = seed.document_count();
    }

    log::info!("{}", DONE_BANNER);
    Ok(report)
}
