//! Axum route handlers for the Note API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::analysis::{analyze_personality, PersonalityTraits};
use crate::errors::AppError;
use crate::models::profile::ProfileData;
use crate::note::fallback::select_fallback;
use crate::note::generator::{generate_note, write_with_fallback, NoteResponse};
use crate::note::writer::NoteSource;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct NoteRequest {
    pub username: String,
}

/// Profile data supplied by the caller, optionally with precomputed traits.
#[derive(Debug, Deserialize)]
pub struct GenerateNoteRequest {
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub tweets: Vec<String>,
    pub traits: Option<PersonalityTraits>,
}

#[derive(Debug, Serialize)]
pub struct GenerateNoteResponse {
    pub note: String,
    pub source: NoteSource,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/notes
///
/// Full pipeline: fetch profile → analyze → write note, degrading to fallback notes.
pub async fn handle_create_note(
    State(state): State<AppState>,
    Json(request): Json<NoteRequest>,
) -> Result<Json<NoteResponse>, AppError> {
    let response = generate_note(
        state.profiles.as_deref(),
        state.note_writer.as_ref(),
        &request.username,
    )
    .await?;
    Ok(Json(response))
}

/// POST /api/generate-note
///
/// Writes a note for caller-supplied profile data. Traits are derived when absent.
pub async fn handle_generate_note(
    State(state): State<AppState>,
    Json(request): Json<GenerateNoteRequest>,
) -> Result<Json<GenerateNoteResponse>, AppError> {
    let profile =
        ProfileData::normalized(&request.username, &request.name, &request.bio, request.tweets);
    if profile.username.is_empty() {
        return Err(AppError::Validation("username cannot be empty".to_string()));
    }

    if profile.tweets.is_empty() {
        return Ok(Json(GenerateNoteResponse {
            note: select_fallback(&profile.username),
            source: NoteSource::Fallback,
        }));
    }

    let traits = match request.traits {
        Some(traits) => {
            traits.validate().map_err(AppError::Validation)?;
            traits
        }
        None => analyze_personality(&profile),
    };
    let (note, source) = write_with_fallback(state.note_writer.as_ref(), &profile, &traits).await;

    Ok(Json(GenerateNoteResponse { note, source }))
}
