use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

/// The count field did not hold a whole number in the accepted range.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("user count {input:?} is not a whole number between {min} and {max}")]
pub struct ValidationError {
    pub input: String,
    pub min: u8,
    pub max: u8,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Network {
        url: Url,
        #[source]
        source: reqwest::Error,
    },
    #[error("HTTP error {status}")]
    Http { status: StatusCode },
    #[error("unexpected data format from API: {0}")]
    Format(#[from] FormatError),
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("response body is not JSON: {0}")]
    Json(#[source] serde_json::Error),
    #[error("response has no `results` array")]
    MissingResults,
    #[error("profile record {index} is malformed: {source}")]
    Record {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}
