//! Axum route handlers for the Profile API.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::analysis::{analyze_personality, PersonalityTraits};
use crate::errors::AppError;
use crate::models::profile::{clean_username, ProfileData};
use crate::state::AppState;

/// GET /api/profile/:username
///
/// Proxies the configured profile source and returns normalized profile data.
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<ProfileData>, AppError> {
    let username = clean_username(&username);
    if username.is_empty() {
        return Err(AppError::Validation("username cannot be empty".to_string()));
    }

    let source = state.profiles.as_ref().ok_or_else(|| {
        AppError::ServiceUnavailable("Profile source is not configured".to_string())
    })?;

    let profile = source.fetch(username).await?;
    Ok(Json(profile))
}

/// POST /api/analyze
///
/// Derives personality traits from caller-supplied profile data.
pub async fn handle_analyze(
    Json(profile): Json<ProfileData>,
) -> Result<Json<PersonalityTraits>, AppError> {
    let profile = profile.into_normalized();
    if profile.username.is_empty() {
        return Err(AppError::Validation("username cannot be empty".to_string()));
    }
    Ok(Json(analyze_personality(&profile)))
}
