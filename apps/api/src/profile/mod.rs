//! Profile data source: the boundary to whatever service reads public profiles.
//!
//! `AppState` carries an `Option<Arc<dyn ProfileSource>>`. When no source is configured
//! the profile route answers 503 and the note pipeline goes straight to fallback notes.

pub mod handlers;
pub mod http;

use async_trait::async_trait;
use thiserror::Error;

use crate::errors::AppError;
use crate::models::profile::ProfileData;

pub use http::HttpProfileSource;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile @{0} not found or private")]
    NotFound(String),

    #[error("profile source timed out")]
    Timeout,

    #[error("profile source is rate limited")]
    RateLimited,

    #[error("profile source failed: {0}")]
    Upstream(String),

    #[error("profile source returned malformed data: {0}")]
    Malformed(String),
}

impl From<ProfileError> for AppError {
    fn from(e: ProfileError) -> Self {
        match e {
            ProfileError::NotFound(username) => AppError::NotFound(format!(
                "Could not access data for @{username}. The profile might be private or doesn't exist."
            )),
            ProfileError::Timeout => {
                AppError::Timeout("Failed to load the profile. Please try again.".to_string())
            }
            ProfileError::RateLimited => AppError::TooManyRequests(
                "The profile source is busy. Please try again in a moment.".to_string(),
            ),
            e @ (ProfileError::Upstream(_) | ProfileError::Malformed(_)) => {
                AppError::Upstream(e.to_string())
            }
        }
    }
}

/// Supplies profile data for a cleaned username.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch(&self, username: &str) -> Result<ProfileData, ProfileError>;
}
