use anyhow::{anyhow, Result};
use std::env;

pub const DEFAULT_BASE_URL: &str = "https://opendart.fss.or.kr/api";

/// Environment variable holding the OpenDART API key.
pub const API_KEY_ENV: &str = "DART_API_KEY";

#[derive(Debug, Clone)]
pub struct DartConfig {
    pub api_key: String,
    pub base_url: String,
}

impl DartConfig {
    pub fn new(api_key: String) -> Self {
        DartConfig {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Reads the API key from the process environment. A missing or blank
    /// key is fatal; nothing downstream works without it.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(API_KEY_ENV)
            .map_err(|_| anyhow!("{} is not set; an OpenDART API key is required", API_KEY_ENV))?;
        if api_key.trim().is_empty() {
            return Err(anyhow!("{} is set but empty", API_KEY_ENV));
        }
        Ok(DartConfig::new(api_key))
    }
}
