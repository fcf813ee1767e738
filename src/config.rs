use std::env;

use anyhow::{bail, Context, Result};
use url::Url;

use crate::client::DEFAULT_API_URL;

pub const API_URL_VAR: &str = "RANDOMUSER_API_URL";
pub const LOG_JSON_VAR: &str = "RANDOMUSER_LOG_JSON";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_url: Url,
    pub log_json: bool,
}

impl AppConfig {
    /// Reads settings from the process environment (after `.env` is loaded).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let raw_url = var(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = Url::parse(raw_url.trim())
            .with_context(|| format!("{API_URL_VAR} is not a valid URL: {raw_url}"))?;
        if !matches!(api_url.scheme(), "http" | "https") {
            bail!("{API_URL_VAR} must be an http(s) URL, got {api_url}");
        }

        let log_json = var(LOG_JSON_VAR)
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(false);

        Ok(Self { api_url, log_json })
    }
}
