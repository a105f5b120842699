use std::env;

use crate::config::db::StorageConfig;
use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// Everything the binary needs at startup, read from the environment once.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage: StorageConfig,
    pub security: SecurityConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("BACKEND_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = parse_port(env::var("BACKEND_PORT").ok().as_deref())?;

        Ok(Self {
            host,
            port,
            storage: StorageConfig::from_env()?,
            security: SecurityConfig::from_env()?,
        })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, AppError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(raw) => raw
            .trim()
            .parse::<u16>()
            .map_err(|_| AppError::config(format!("BACKEND_PORT must be a valid port number, got: '{raw}'"))),
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
        assert_eq!(parse_port(Some("3001")).unwrap(), 3001);
        assert!(parse_port(Some("http")).is_err());
        assert!(parse_port(Some("70000")).is_err());
    }

    #[test]
    #[serial]
    fn test_from_env() {
        env::set_var("BACKEND_HOST", "127.0.0.1");
        env::set_var("BACKEND_PORT", "9090");
        env::set_var("DATABASE_URL", "sqlite::memory:");
        env::set_var("BACKEND_JWT_SECRET", "secret");

        let cfg = AppConfig::from_env().unwrap();
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.port, 9090);
        assert_eq!(cfg.storage.database_url, "sqlite::memory:");

        for name in ["BACKEND_HOST", "BACKEND_PORT", "DATABASE_URL", "BACKEND_JWT_SECRET"] {
            env::remove_var(name);
        }
    }
}
