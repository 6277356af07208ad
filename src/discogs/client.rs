use std::time::Duration;

use anyhow::Result;
use log::debug;
use reqwest::StatusCode;

use crate::discogs::api_types::release::Release;
use crate::error::FetchError;

pub const DEFAULT_BASE_URL: &str = "https://api.discogs.com";
pub const DEFAULT_USER_AGENT: &str = "HitMeApp/0.1 +development_mode";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub struct Client {
    client: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new(base_url: &str, user_agent: &str, timeout: Duration) -> Result<Self> {
        let headers = {
            let mut headers = reqwest::header::HeaderMap::new();
            headers.insert(reqwest::header::USER_AGENT, user_agent.try_into()?);
            headers
        };
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    pub fn release_url(&self, release_id: &str) -> String {
        format!("{}/releases/{release_id}", self.base_url)
    }

    pub async fn get_release(&self, release_id: &str) -> Result<Release, FetchError> {
        let response = self.client.get(self.release_url(release_id)).send().await?;
        let status = response.status();
        debug!("GET release {release_id}: {status}");
        if status != StatusCode::OK {
            // Body is dropped unread, which releases the connection
            return decode_release(status, &[]);
        }
        let body = response.bytes().await?;
        decode_release(status, &body)
    }
}

/// Classify a `GET /releases/{id}` response.
///
/// 404 means there is no release with that ID, which is expected when guessing IDs and is reported
/// as [`FetchError::InvalidRelease`]. Any status other than 200 or 404 is an error.
pub fn decode_release(status: StatusCode, body: &[u8]) -> Result<Release, FetchError> {
    match status {
        StatusCode::OK => Ok(serde_json::from_slice(body)?),
        StatusCode::NOT_FOUND => Err(FetchError::InvalidRelease),
        status => Err(FetchError::Status(status)),
    }
}
