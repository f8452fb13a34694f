//! Storefront configuration.
//!
//! Read once at startup from the environment (a `.env` file is honored in
//! development). `CATALOG_API_BASE_URL` is required and must parse as a URL;
//! `LOJA_HOST`, `LOJA_PORT`, and `LOJA_BASE_URL` have local-development
//! defaults.

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(&'static str, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Bind address.
    pub host: IpAddr,
    /// Listen port.
    pub port: u16,
    /// Public base URL; an https scheme turns on Secure session cookies.
    pub base_url: String,
    /// Base URL of the remote product catalog API.
    pub catalog_base_url: Url,
}

impl StorefrontConfig {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a required variable is missing or a value
    /// fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        Ok(Self {
            host: parse_var("LOJA_HOST", "127.0.0.1")?,
            port: parse_var("LOJA_PORT", "3000")?,
            base_url: env_or("LOJA_BASE_URL", "http://localhost:3000"),
            catalog_base_url: require_var("CATALOG_API_BASE_URL")?,
        })
    }

    /// The socket address to bind the listener to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn env_or(key: &'static str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_var<T>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    env_or(key, default)
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidEnvVar(key, e.to_string()))
}

fn require_var<T>(key: &'static str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    std::env::var(key)
        .map_err(|_| ConfigError::MissingEnvVar(key))?
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidEnvVar(key, e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr_combines_host_and_port() {
        let config = StorefrontConfig {
            host: "0.0.0.0".parse().unwrap(),
            port: 8080,
            base_url: "http://localhost:8080".to_string(),
            catalog_base_url: Url::parse("https://api.lojatech.com.br").unwrap(),
        };

        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_error_messages_name_the_variable() {
        let err = ConfigError::MissingEnvVar("CATALOG_API_BASE_URL");
        assert!(err.to_string().contains("CATALOG_API_BASE_URL"));
    }
}
