//! # mongo-bootstrap
//!
//! Provisions a fresh MongoDB deployment for the application: one
//! read-write user, the `users`/`posts`/`sessions` collections with their
//! indexes and, when `NODE_ENV=development`, a sample admin user and post.
//!
//! ## Environment Variables
//!
//! - `MONGODB_URI`: admin connection string (default `mongodb://localhost:27017`)
//! - `MONGO_INITDB_DATABASE`: target database (default `mern_app`)
//! - `MONGO_USERNAME` / `MONGO_PASSWORD`: application credential
//! - `NODE_ENV`: `development` enables seed data

mod bootstrap;
mod config;
mod database;
mod models;
mod schema;
mod seeds;
mod utils;

use bootstrap::ProvisioningPlan;
use config::BootstrapConfig;
use dotenv::dotenv;
use utils::AppError;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = BootstrapConfig::from_env();
    log::debug!("Configuration: {:?}", config);

    if let Err(e) = run(&config).await {
        log::error!("❌ MongoDB initialization failed: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: &BootstrapConfig) -> Result<(), AppError> {
    log::info!("🚀 Connecting to MongoDB...");
    let mut db = database::MongoDB::connect(&config.mongodb_uri).await?;

    let plan = ProvisioningPlan::from_config(config);
    let report = bootstrap::apply(&plan, &mut db).await?;

    log::info!(
        "📋 {}: user {}, {} collections, {} indexes, {} seed documents",
        report.database,
        report.user,
        report.collections_created.len(),
        report.indexes_created.len(),
        report.seeded_documents
    );

    Ok(())
}
