use std::env;
use std::str::FromStr;

use tracing::warn;

/// Process-level settings read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub secret_key: String,
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Session lifetime in seconds
    pub session_expiry: i64,
    pub template_dir: String,
    pub max_body_bytes: usize,
}

impl AppConfig {
    pub const DEFAULT_SECRET_KEY: &'static str = "your_secret_key";
    pub const DEFAULT_DATABASE_URL: &'static str = "sqlite://portfolio.db?mode=rwc";
    pub const DEFAULT_SESSION_EXPIRY: i64 = 12 * 60 * 60;
    pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

    /// Try .env.{RUST_ENV} first, then fall back to .env
    pub fn load_env_files() {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let env_file = format!(".env.{}", env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }
    }

    pub fn from_env() -> Self {
        let secret_key = match env::var("SECRET_KEY") {
            Ok(key) if !key.trim().is_empty() => key,
            _ => {
                warn!("SECRET_KEY is not set, falling back to the built-in development key");
                Self::DEFAULT_SECRET_KEY.to_string()
            }
        };

        let database_url = env::var("DATABASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_DATABASE_URL.to_string());

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = parse_or("PORT", 5000u16);

        let mut session_expiry = parse_or("SESSION_EXPIRY", Self::DEFAULT_SESSION_EXPIRY);
        if session_expiry <= 0 {
            warn!("SESSION_EXPIRY must be positive, using default");
            session_expiry = Self::DEFAULT_SESSION_EXPIRY;
        }

        let template_dir = env::var("TEMPLATE_DIR").unwrap_or_else(|_| "templates".to_string());
        let max_body_bytes = parse_or("MAX_BODY_BYTES", Self::DEFAULT_MAX_BODY_BYTES);

        Self {
            secret_key,
            database_url,
            host,
            port,
            session_expiry,
            template_dir,
            max_body_bytes,
        }
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Debug,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or_else(|_| {
            warn!(key, value = %raw, ?default, "Invalid value, using default");
            default
        }),
        Err(_) => default,
    }
}
