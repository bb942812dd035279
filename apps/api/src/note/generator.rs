//! Note generation: orchestrates the full pipeline for one username.
//!
//! Flow: clean username → fetch profile → analyze traits → writer → response.
//!
//! Missing profile data is not an error: any fetch failure, a missing source, or a
//! profile without tweets produces a fallback note. A failing generative writer
//! degrades to the deterministic composer.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::{analyze_personality, PersonalityTraits};
use crate::errors::AppError;
use crate::models::profile::{clean_username, ProfileData};
use crate::note::composer::compose;
use crate::note::fallback::select_fallback;
use crate::note::writer::{NoteSource, NoteWriter};
use crate::profile::ProfileSource;

/// Response from the note pipeline.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteResponse {
    pub id: Uuid,
    pub username: String,
    pub note: String,
    pub source: NoteSource,
    /// Absent for fallback notes, which are produced without profile data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traits: Option<PersonalityTraits>,
    pub generated_at: DateTime<Utc>,
}

impl NoteResponse {
    fn new(
        username: &str,
        note: String,
        source: NoteSource,
        traits: Option<PersonalityTraits>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.to_string(),
            note,
            source,
            traits,
            generated_at: Utc::now(),
        }
    }

    fn fallback(username: &str) -> Self {
        Self::new(username, select_fallback(username), NoteSource::Fallback, None)
    }
}

/// Runs the full note pipeline for a raw username.
///
/// Steps:
/// 1. clean_username() → empty is a validation error
/// 2. profiles.fetch() → any failure, or zero tweets, returns a fallback note
/// 3. analyze_personality() → PersonalityTraits
/// 4. write_with_fallback() → writer output, or the composer if the writer fails
pub async fn generate_note(
    profiles: Option<&dyn ProfileSource>,
    writer: &dyn NoteWriter,
    raw_username: &str,
) -> Result<NoteResponse, AppError> {
    let username = clean_username(raw_username);
    if username.is_empty() {
        return Err(AppError::Validation(
            "Please enter a valid username".to_string(),
        ));
    }

    let Some(source) = profiles else {
        info!("No profile source configured, using fallback note for @{username}");
        return Ok(NoteResponse::fallback(username));
    };

    let profile = match source.fetch(username).await {
        Ok(profile) => profile,
        Err(e) => {
            warn!("Profile fetch for @{username} failed, using fallback note: {e}");
            return Ok(NoteResponse::fallback(username));
        }
    };

    if profile.tweets.is_empty() {
        info!("@{username} has no public tweets, using fallback note");
        return Ok(NoteResponse::fallback(username));
    }

    let traits = analyze_personality(&profile);
    info!(
        "Analyzed @{username}: tone={}, topics={:?}",
        traits.tone_style.as_str(),
        traits.top_topics
    );

    let (note, source) = write_with_fallback(writer, &profile, &traits).await;
    info!("Generated {source:?} note for @{username}");

    Ok(NoteResponse::new(
        &profile.username,
        note,
        source,
        Some(traits),
    ))
}

/// Asks the writer for a note. Errors and blank output fall back to the composer.
pub async fn write_with_fallback(
    writer: &dyn NoteWriter,
    profile: &ProfileData,
    traits: &PersonalityTraits,
) -> (String, NoteSource) {
    match writer.write(profile, traits).await {
        Ok(note) if !note.trim().is_empty() => (note.trim().to_string(), writer.source()),
        Ok(_) => {
            warn!("Note writer returned blank text, composing deterministically");
            (compose(profile, traits), NoteSource::Composed)
        }
        Err(e) => {
            warn!("Note writer failed, composing deterministically: {e}");
            (compose(profile, traits), NoteSource::Composed)
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;

    use async_trait::async_trait;

    use crate::note::fallback::DEFAULT_FALLBACK_NOTE;
    use crate::note::writer::TemplateNoteWriter;
    use crate::profile::ProfileError;

    /// In-memory profile source keyed by username. Unknown users are not found.
    pub(crate) struct StaticProfileSource(pub HashMap<String, ProfileData>);

    impl StaticProfileSource {
        pub(crate) fn with(profiles: Vec<ProfileData>) -> Self {
            Self(
                profiles
                    .into_iter()
                    .map(|p| (p.username.clone(), p))
                    .collect(),
            )
        }
    }

    #[async_trait]
    impl ProfileSource for StaticProfileSource {
        async fn fetch(&self, username: &str) -> Result<ProfileData, ProfileError> {
            match username {
                "slowpoke" => Err(ProfileError::Timeout),
                _ => self
                    .0
                    .get(username)
                    .cloned()
                    .ok_or_else(|| ProfileError::NotFound(username.to_string())),
            }
        }
    }

    /// Writer standing in for an unavailable generative service.
    pub(crate) struct FailingWriter;

    #[async_trait]
    impl NoteWriter for FailingWriter {
        async fn write(
            &self,
            _profile: &ProfileData,
            _traits: &PersonalityTraits,
        ) -> Result<String, AppError> {
            Err(AppError::Llm("service unavailable".to_string()))
        }

        fn source(&self) -> NoteSource {
            NoteSource::Ai
        }
    }

    /// Writer returning a fixed note, as a healthy generative service would.
    pub(crate) struct CannedWriter(pub &'static str);

    #[async_trait]
    impl NoteWriter for CannedWriter {
        async fn write(
            &self,
            _profile: &ProfileData,
            _traits: &PersonalityTraits,
        ) -> Result<String, AppError> {
            Ok(self.0.to_string())
        }

        fn source(&self) -> NoteSource {
            NoteSource::Ai
        }
    }

    pub(crate) fn alice() -> ProfileData {
        ProfileData::normalized(
            "alice",
            "",
            "",
            vec![
                "I love building APIs and helping the community learn to code".to_string(),
                "so grateful for this amazing team!".to_string(),
            ],
        )
    }

    pub(crate) fn quiet() -> ProfileData {
        ProfileData::normalized("quiet", "Quiet Person", "I lurk", vec![])
    }

    #[tokio::test]
    async fn test_empty_username_is_rejected() {
        let err = generate_note(None, &TemplateNoteWriter, " @ ")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_no_source_uses_fallback() {
        let response = generate_note(None, &TemplateNoteWriter, "@alice")
            .await
            .unwrap();
        assert_eq!(response.source, NoteSource::Fallback);
        assert_eq!(response.note, select_fallback("alice"));
        assert_eq!(response.username, "alice");
        assert!(response.traits.is_none());
        assert_ne!(response.note, DEFAULT_FALLBACK_NOTE);
    }

    #[tokio::test]
    async fn test_fetch_failures_use_fallback() {
        let source = StaticProfileSource::with(vec![alice()]);
        for username in ["ghost", "slowpoke"] {
            let response = generate_note(Some(&source), &TemplateNoteWriter, username)
                .await
                .unwrap();
            assert_eq!(response.source, NoteSource::Fallback);
            assert_eq!(response.note, select_fallback(username));
        }
    }

    #[tokio::test]
    async fn test_zero_tweets_uses_fallback() {
        let source = StaticProfileSource::with(vec![quiet()]);
        let response = generate_note(Some(&source), &TemplateNoteWriter, "quiet")
            .await
            .unwrap();
        assert_eq!(response.source, NoteSource::Fallback);
    }

    #[tokio::test]
    async fn test_template_writer_composes_note() {
        let source = StaticProfileSource::with(vec![alice()]);
        let response = generate_note(Some(&source), &TemplateNoteWriter, "alice")
            .await
            .unwrap();
        assert_eq!(response.source, NoteSource::Composed);
        assert!(response.note.starts_with("Hey alice, "));
        assert!(response.note.ends_with("Keep shining! \u{2728}"));
        let traits = response.traits.unwrap();
        assert!(traits.is_technical && traits.is_helpful && traits.is_positive);
    }

    #[tokio::test]
    async fn test_failing_writer_degrades_to_composer() {
        let source = StaticProfileSource::with(vec![alice()]);
        let response = generate_note(Some(&source), &FailingWriter, "alice")
            .await
            .unwrap();
        assert_eq!(response.source, NoteSource::Composed);
        let profile = alice();
        assert_eq!(
            response.note,
            compose(&profile, &analyze_personality(&profile))
        );
    }

    #[tokio::test]
    async fn test_healthy_writer_note_is_used() {
        let source = StaticProfileSource::with(vec![alice()]);
        let writer = CannedWriter("  Alice, you make the internet kinder.  ");
        let response = generate_note(Some(&source), &writer, "alice")
            .await
            .unwrap();
        assert_eq!(response.source, NoteSource::Ai);
        assert_eq!(response.note, "Alice, you make the internet kinder.");
    }

    #[tokio::test]
    async fn test_blank_writer_output_degrades_to_composer() {
        let (note, source) =
            write_with_fallback(&CannedWriter("   "), &alice(), &PersonalityTraits::default())
                .await;
        assert_eq!(source, NoteSource::Composed);
        assert!(!note.is_empty());
    }
}
