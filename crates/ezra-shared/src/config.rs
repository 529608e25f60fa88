//! Configuration management

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub api: ApiSettings,
    pub signature: SignatureSettings,
    pub management: ManagementSettings,
    pub auth: AuthSettings,
}

/// Backend REST API settings. The backend owns persistence and the
/// signature-provider integration; this side only consumes its surface.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub base_url: String,
}

/// Public host of the signature provider, used to build admin-facing
/// document view links.
#[derive(Debug, Deserialize, Clone)]
pub struct SignatureSettings {
    pub public_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ManagementSettings {
    pub contact_email: String,
}

/// Token acquisition settings for calls issued right after auth
/// initialization, when the provider may not have a token yet.
#[derive(Debug, Deserialize, Clone)]
pub struct AuthSettings {
    pub token_retry_attempts: u32,
    pub token_retry_backoff_ms: u64,
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Config::builder()
            .set_default("api.base_url", "http://localhost:8080")?
            .set_default("signature.public_url", "http://localhost:3000")?
            .set_default("management.contact_email", crate::constants::DEFAULT_MANAGEMENT_EMAIL)?
            .set_default("auth.token_retry_attempts", 3)?
            .set_default("auth.token_retry_backoff_ms", 1000)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?;
        Ok(config.try_deserialize()?)
    }
}
