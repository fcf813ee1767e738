use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::{FetchError, FormatError};
use crate::models::{Profile, RequestParams, ResponseInfo};

pub const DEFAULT_API_URL: &str = "https://randomuser.me/api/";

/// Anything that can hand back a batch of profiles for a request.
#[async_trait]
pub trait UserSource: Send + Sync {
    async fn fetch_users(&self, params: &RequestParams) -> Result<Vec<Profile>, FetchError>;
}

/// Creates the shared HTTP client. Requests go out with reqwest's stock
/// headers only.
pub fn build_client() -> Result<Client> {
    Client::builder()
        .build()
        .context("Failed to build HTTP client")
}

/// `{base}?results={count}[&gender={gender}]`, keeping any query the base already has.
pub fn request_url(base: &Url, params: &RequestParams) -> Url {
    let mut url = base.clone();
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("results", &params.count.to_string());
        if let Some(gender) = params.gender {
            query.append_pair("gender", gender.as_str());
        }
    }
    url
}

pub struct RandomUserClient {
    http: Client,
    base_url: Url,
}

impl RandomUserClient {
    pub fn new(http: Client, base_url: Url) -> Self {
        Self { http, base_url }
    }
}

#[async_trait]
impl UserSource for RandomUserClient {
    async fn fetch_users(&self, params: &RequestParams) -> Result<Vec<Profile>, FetchError> {
        let url = request_url(&self.base_url, params);
        debug!(%url, "requesting profiles");

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|source| FetchError::Network {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http { status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Network { url, source })?;

        Ok(parse_results(&body)?)
    }
}

/// Pulls the `results` array out of a response body and decodes each record.
pub fn parse_results(body: &[u8]) -> Result<Vec<Profile>, FormatError> {
    let mut document: Value = serde_json::from_slice(body).map_err(FormatError::Json)?;

    if let Some(message) = document.get("error").and_then(Value::as_str) {
        debug!(api_error = message, "API reported an error");
    }
    if let Some(info) = document.get("info") {
        if let Ok(info) = serde_json::from_value::<ResponseInfo>(info.clone()) {
            debug!(seed = ?info.seed, version = ?info.version, "response info");
        }
    }

    let results = match document.get_mut("results") {
        Some(Value::Array(items)) => std::mem::take(items),
        _ => return Err(FormatError::MissingResults),
    };

    results
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|source| FormatError::Record { index, source })
        })
        .collect()
}
