use crate::config::AppConfig;

pub const DEFAULT_ISSUER: &str = "portfolio_cms";

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub session_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            secret_key: config.secret_key.clone(),
            issuer: DEFAULT_ISSUER.to_string(),
            session_expiry: config.session_expiry,
        }
    }
}
