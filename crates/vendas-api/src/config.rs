use std::collections::HashMap;
use std::env;

use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: String,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let values: HashMap<String, String> = env::vars().collect();
        Self::from_lookup(|name| values.get(name).cloned())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = match lookup("VENDAS_API_BIND_ADDR") {
            None => DEFAULT_BIND_ADDR.to_string(),
            Some(value) if value.trim().is_empty() => {
                return Err(ConfigError::Invalid(
                    "VENDAS_API_BIND_ADDR must not be empty".to_string(),
                ));
            }
            Some(value) => value.trim().to_string(),
        };

        Ok(Self { bind_addr })
    }
}
