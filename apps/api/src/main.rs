mod admission;
mod analysis;
mod config;
mod errors;
mod export;
mod llm_client;
mod models;
mod note;
mod profile;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::admission::AdmissionGate;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::note::writer::{LlmNoteWriter, NoteWriter, TemplateNoteWriter};
use crate::profile::{HttpProfileSource, ProfileSource};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Cheerify v{}", env!("CARGO_PKG_VERSION"));

    // Profile source is optional; without it every note is a fallback note
    let profiles: Option<Arc<dyn ProfileSource>> = match &config.profile_source_url {
        Some(url) => {
            let source =
                HttpProfileSource::new(url, Duration::from_secs(config.profile_timeout_secs))?;
            info!("Profile source: {url}");
            Some(Arc::new(source))
        }
        None => {
            info!("PROFILE_SOURCE_URL not set, notes will use fallback templates");
            None
        }
    };

    // Note writer (TemplateNoteWriter by default, LlmNoteWriter when GEMINI_API_KEY is set)
    let note_writer: Arc<dyn NoteWriter> = match &config.gemini_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone())?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Arc::new(LlmNoteWriter(llm))
        }
        None => {
            info!("GEMINI_API_KEY not set, using template note writer");
            Arc::new(TemplateNoteWriter)
        }
    };

    let gate = Arc::new(AdmissionGate::new(config.max_concurrent_requests));
    info!("Admission ceiling: {} requests", gate.max());

    let state = AppState {
        config: config.clone(),
        profiles,
        note_writer,
        gate,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
