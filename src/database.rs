use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};
use tracing::info;

/// Opens the connection pool for `database_url` (postgres:// or sqlite://).
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let url = normalize_url(database_url);
    let is_sqlite = url.starts_with("sqlite:");

    let mut opt = ConnectOptions::new(url);
    opt.max_connections(if is_sqlite { 5 } else { 20 })
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt).await?;
    info!(backend = ?conn.get_database_backend(), "Database connected");
    Ok(conn)
}

/// Hosting platforms still hand out the legacy `postgres://` scheme.
fn normalize_url(database_url: &str) -> String {
    match database_url.strip_prefix("postgres://") {
        Some(rest) => format!("postgresql://{}", rest),
        None => database_url.to_string(),
    }
}
