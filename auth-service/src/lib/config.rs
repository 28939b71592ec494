use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub grpc_port: u16,
}

/// Ed25519 key pair locations and token lifetime.
#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    /// PKCS#8 PEM, signing side
    pub private_key_path: String,
    /// SPKI PEM, verifying side
    pub public_key_path: String,
    pub token_ttl_minutes: i64,
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, JWT__PRIVATE_KEY_PATH, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // JWT__TOKEN_TTL_MINUTES=15 overrides jwt.token_ttl_minutes
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Token lifetime as a duration.
    ///
    /// # Errors
    /// `ConfigError::Message` if `jwt.token_ttl_minutes` is not positive or
    /// out of range
    pub fn token_ttl(&self) -> Result<chrono::Duration, ConfigError> {
        let minutes = self.jwt.token_ttl_minutes;
        if minutes <= 0 {
            return Err(ConfigError::Message(format!(
                "jwt.token_ttl_minutes must be positive, got {}",
                minutes
            )));
        }

        chrono::Duration::try_minutes(minutes).ok_or_else(|| {
            ConfigError::Message(format!("jwt.token_ttl_minutes out of range: {}", minutes))
        })
    }
}
