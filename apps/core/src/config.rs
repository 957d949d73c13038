//! Service configuration.
//!
//! Only ambient concerns come from the environment (bind address, log
//! filter). Response selection and conversation behavior take nothing from
//! the environment.

use std::env;
use std::net::SocketAddr;

use dotenv::dotenv;

use crate::error::AppError;

/// Default bind address. Localhost only; the browser UI is the sole client.
const DEFAULT_BIND: &str = "127.0.0.1:8787";

/// Runtime configuration resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server listens on.
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Loads configuration from `.env` / environment variables.
    ///
    /// `HEALTHCOACH_BIND` overrides the bind address.
    pub fn from_env() -> Result<Self, AppError> {
        dotenv().ok();
        let bind = env::var("HEALTHCOACH_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());
        let bind_addr = bind
            .parse::<SocketAddr>()
            .map_err(|e| AppError::Config(format!("Invalid bind address '{}': {}", bind, e)))?;
        Ok(Self { bind_addr })
    }
}
