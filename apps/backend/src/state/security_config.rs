use std::env;

use jsonwebtoken::Algorithm;

use crate::error::AppError;

/// Process-wide token signing configuration.
///
/// Loaded once at startup and never mutated; there is no rotation.
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Secret key for signing and verifying tokens
    pub jwt_secret: Vec<u8>,
    /// JWT algorithm to use (defaults to HS256)
    pub algorithm: Algorithm,
}

impl SecurityConfig {
    /// Create a new SecurityConfig with the given JWT secret
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
        }
    }

    /// Read the secret from `BACKEND_JWT_SECRET`.
    pub fn from_env() -> Result<Self, AppError> {
        match env::var("BACKEND_JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => Ok(Self::new(secret.into_bytes())),
            _ => Err(AppError::config(
                "Required environment variable 'BACKEND_JWT_SECRET' is not set",
            )),
        }
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::new(b"default_secret_for_tests_only".to_vec())
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    #[serial]
    fn from_env_requires_secret() {
        env::remove_var("BACKEND_JWT_SECRET");
        assert!(SecurityConfig::from_env().is_err());

        env::set_var("BACKEND_JWT_SECRET", "");
        assert!(SecurityConfig::from_env().is_err());

        env::set_var("BACKEND_JWT_SECRET", "s3cret");
        let cfg = SecurityConfig::from_env().unwrap();
        assert_eq!(cfg.jwt_secret, b"s3cret".to_vec());
        assert_eq!(cfg.algorithm, Algorithm::HS256);

        env::remove_var("BACKEND_JWT_SECRET");
    }
}
