use std::sync::Arc;

use actix_web::{App, HttpServer};
use migration::{Migrator, MigratorTrait};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portfolio_cms::app::AppContext;
use portfolio_cms::config::AppConfig;
use portfolio_cms::database;
use portfolio_cms::media::application::domain::policies::UploadPolicy;

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    AppConfig::load_env_files();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env();
    let server_url = config.server_url();

    let conn = database::connect(&config.database_url)
        .await
        .map_err(|e| std::io::Error::other(format!("Failed to connect to database: {e}")))?;

    Migrator::up(&conn, None)
        .await
        .map_err(|e| std::io::Error::other(format!("Failed to run migrations: {e}")))?;

    let db_arc = Arc::new(conn);

    let context = AppContext::build(&config, db_arc, UploadPolicy::default()).map_err(|e| {
        error!(error = ?e, "Failed to load templates");
        std::io::Error::other(format!("Failed to load templates: {e}"))
    })?;

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        let context = context.clone();
        App::new().configure(move |cfg| context.configure(cfg))
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
