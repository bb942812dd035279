use std::sync::Arc;

use crate::admission::AdmissionGate;
use crate::config::Config;
use crate::note::writer::NoteWriter;
use crate::profile::ProfileSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Profile data collaborator. `None` when PROFILE_SOURCE_URL is unset.
    pub profiles: Option<Arc<dyn ProfileSource>>,
    /// Pluggable note writer. Default: TemplateNoteWriter. LlmNoteWriter when GEMINI_API_KEY is set.
    pub note_writer: Arc<dyn NoteWriter>,
    /// In-flight request ceiling shared by every gated route.
    pub gate: Arc<AdmissionGate>,
}
