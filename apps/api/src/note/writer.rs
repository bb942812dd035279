//! Note writers: pluggable, trait-based backends that turn a profile into a note.
//!
//! Default: `TemplateNoteWriter` (pure-Rust composer, deterministic, fully testable).
//! Optional: `LlmNoteWriter` (Gemini), enabled when `GEMINI_API_KEY` is set.
//!
//! `AppState` holds an `Arc<dyn NoteWriter>`, chosen at startup via config.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::analysis::PersonalityTraits;
use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::profile::ProfileData;
use crate::note::composer::compose;
use crate::note::prompts::{NOTE_PROMPT_TEMPLATE, NOTE_SYSTEM, PROMPT_TWEET_SAMPLE};

/// Where a returned note came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteSource {
    /// Written by the generative-text service.
    Ai,
    /// Built by the deterministic composer.
    Composed,
    /// A static fallback template; no profile data was available.
    Fallback,
}

/// The note writer trait. Implement this to swap backends without touching
/// the pipeline or handlers.
#[async_trait]
pub trait NoteWriter: Send + Sync {
    async fn write(
        &self,
        profile: &ProfileData,
        traits: &PersonalityTraits,
    ) -> Result<String, AppError>;

    /// The source label attached to notes this writer produces.
    fn source(&self) -> NoteSource;
}

/// Deterministic writer backed by the composer. Never fails.
pub struct TemplateNoteWriter;

#[async_trait]
impl NoteWriter for TemplateNoteWriter {
    async fn write(
        &self,
        profile: &ProfileData,
        traits: &PersonalityTraits,
    ) -> Result<String, AppError> {
        Ok(compose(profile, traits))
    }

    fn source(&self) -> NoteSource {
        NoteSource::Composed
    }
}

/// Generative writer via Gemini.
pub struct LlmNoteWriter(pub LlmClient);

#[async_trait]
impl NoteWriter for LlmNoteWriter {
    async fn write(
        &self,
        profile: &ProfileData,
        traits: &PersonalityTraits,
    ) -> Result<String, AppError> {
        let prompt = build_note_prompt(profile, traits);
        self.0
            .call_text(&prompt, NOTE_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("Note generation failed: {e}")))
    }

    fn source(&self) -> NoteSource {
        NoteSource::Ai
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Fills the note prompt template. Profile-supplied text is substituted last so
/// placeholders inside tweets or bios are left alone.
pub fn build_note_prompt(profile: &ProfileData, traits: &PersonalityTraits) -> String {
    let topics = if traits.top_topics.is_empty() {
        "General".to_string()
    } else {
        traits
            .top_topics
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let bio = if profile.bio.trim().is_empty() {
        "Not provided"
    } else {
        profile.bio.as_str()
    };
    let tweets = profile
        .tweets
        .iter()
        .take(PROMPT_TWEET_SAMPLE)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" | ");

    NOTE_PROMPT_TEMPLATE
        .replace("{positive}", yes_no(traits.is_positive))
        .replace("{humorous}", yes_no(traits.is_humorous))
        .replace("{technical}", yes_no(traits.is_technical))
        .replace("{creative}", yes_no(traits.is_creative))
        .replace("{helpful}", yes_no(traits.is_helpful))
        .replace("{topics}", &topics)
        .replace("{tone_guidance}", traits.tone_style.guidance())
        .replace("{tone}", traits.tone_style.as_str())
        .replace("{display_name}", profile.display_name())
        .replace("{username}", &profile.username)
        .replace("{bio}", bio)
        .replace("{tweets}", &tweets)
}
