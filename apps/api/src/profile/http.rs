use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::{info, warn};

use crate::models::profile::ProfileData;
use crate::profile::{ProfileError, ProfileSource};

/// Reads profiles from an HTTP service exposing `GET {base}/users/{username}`,
/// which answers with `{username, name, bio, tweets}` JSON.
#[derive(Clone)]
pub struct HttpProfileSource {
    client: Client,
    base_url: Url,
}

impl HttpProfileSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("PROFILE_SOURCE_URL '{base_url}' is not a valid URL"))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("PROFILE_SOURCE_URL '{base_url}' cannot be used as a base URL");
        }
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build profile source HTTP client")?;
        Ok(Self { client, base_url })
    }

    fn profile_url(&self, username: &str) -> Result<Url, ProfileError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ProfileError::Upstream("invalid base URL".to_string()))?
            .pop_if_empty()
            .push("users")
            .push(username);
        Ok(url)
    }
}

fn classify_transport_error(e: reqwest::Error) -> ProfileError {
    if e.is_timeout() {
        ProfileError::Timeout
    } else {
        ProfileError::Upstream(e.to_string())
    }
}

#[async_trait]
impl ProfileSource for HttpProfileSource {
    async fn fetch(&self, username: &str) -> Result<ProfileData, ProfileError> {
        let url = self.profile_url(username)?;
        info!("Fetching profile for @{username}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(classify_transport_error)?;

        match response.status() {
            StatusCode::NOT_FOUND => return Err(ProfileError::NotFound(username.to_string())),
            StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
                return Err(ProfileError::Timeout)
            }
            StatusCode::TOO_MANY_REQUESTS => return Err(ProfileError::RateLimited),
            status if !status.is_success() => {
                warn!("Profile source returned {status} for @{username}");
                return Err(ProfileError::Upstream(format!("status {status}")));
            }
            _ => {}
        }

        let body = response.text().await.map_err(classify_transport_error)?;
        let raw: ProfileData =
            serde_json::from_str(&body).map_err(|e| ProfileError::Malformed(e.to_string()))?;

        if raw.is_empty() {
            return Err(ProfileError::NotFound(username.to_string()));
        }

        let profile = ProfileData::normalized(username, &raw.name, &raw.bio, raw.tweets);
        info!(
            "Fetched @{}: {} tweets, bio {} chars",
            profile.username,
            profile.tweets.len(),
            profile.bio.len()
        );
        Ok(profile)
    }
}
