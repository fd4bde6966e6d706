use std::env;
use std::sync::Arc;

use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portfolio_cms::app::seed_orchestrator;
use portfolio_cms::auth::adapter::outgoing::security::Argon2Hasher;
use portfolio_cms::config::AppConfig;
use portfolio_cms::database;
use portfolio_cms::seed::application::AdminCredentials;

const DEFAULT_ADMIN: &str = "admin";

fn admin_credentials() -> AdminCredentials {
    let username = env::var("ADMIN_USERNAME").unwrap_or_else(|_| DEFAULT_ADMIN.to_string());
    let password = match env::var("ADMIN_PASSWORD") {
        Ok(password) if !password.is_empty() => password,
        _ => {
            warn!("ADMIN_PASSWORD is not set, seeding the default admin password");
            DEFAULT_ADMIN.to_string()
        }
    };

    AdminCredentials { username, password }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    AppConfig::load_env_files();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();

    let conn = database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    Migrator::up(&conn, None)
        .await
        .context("Failed to run migrations")?;

    let orchestrator = seed_orchestrator(Arc::new(conn), Arc::new(Argon2Hasher::from_env()));
    let report = orchestrator
        .run(&admin_credentials())
        .await
        .context("Seeding failed")?;

    if report.is_noop() {
        info!("Database already seeded, nothing to do");
    } else {
        info!(
            admin = report.admin_created,
            profile = report.profile_created,
            education = report.education_created,
            skills = report.skills_created,
            projects = report.projects_created,
            "Seed finished"
        );
    }

    Ok(())
}
