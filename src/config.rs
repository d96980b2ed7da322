use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Server configuration from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    /// Optional JSON file with the recipe list. Built-in recipes are used when unset.
    pub recipes_path: Option<PathBuf>,
    /// Directory served for everything the router does not handle (scripts, images).
    pub static_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    /// LISTEN_ADDR defaults to "0.0.0.0:3000", STATIC_DIR to "static".
    pub fn from_env() -> Result<Self, ConfigError> {
        let listen_addr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("LISTEN_ADDR", "must be a valid socket address"))?;

        let recipes_path = match std::env::var("RECIPES_PATH") {
            Ok(p) if !p.trim().is_empty() => Some(PathBuf::from(p)),
            _ => None,
        };

        let static_dir = std::env::var("STATIC_DIR")
            .unwrap_or_else(|_| "static".to_string())
            .into();

        Ok(Config {
            listen_addr,
            recipes_path,
            static_dir,
        })
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, &'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message() {
        let err = ConfigError::Invalid("LISTEN_ADDR", "must be a valid socket address");
        assert_eq!(
            err.to_string(),
            "Invalid value for LISTEN_ADDR: must be a valid socket address"
        );
    }
}
