pub mod health;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::admission::admission_control;
use crate::export::handlers as export;
use crate::note::handlers as note;
use crate::profile::handlers as profile;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Profile and note routes count against the in-flight ceiling.
    let gated = Router::new()
        .route("/api/profile/:username", get(profile::handle_get_profile))
        .route("/api/analyze", post(profile::handle_analyze))
        .route("/api/notes", post(note::handle_create_note))
        .route("/api/generate-note", post(note::handle_generate_note))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            admission_control,
        ));

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/health", get(health::health_handler))
        .route("/api/export/pdf", post(export::handle_export_pdf))
        .merge(gated)
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod test_helpers {
    use std::sync::Arc;

    use crate::admission::AdmissionGate;
    use crate::config::Config;
    use crate::note::writer::NoteWriter;
    use crate::profile::ProfileSource;
    use crate::state::AppState;

    pub fn test_config(max_concurrent_requests: usize) -> Config {
        Config {
            port: 0,
            rust_log: "debug".to_string(),
            gemini_api_key: None,
            profile_source_url: None,
            profile_timeout_secs: 5,
            max_concurrent_requests,
        }
    }

    pub fn test_state(
        profiles: Option<Arc<dyn ProfileSource>>,
        note_writer: Arc<dyn NoteWriter>,
        max_concurrent_requests: usize,
    ) -> AppState {
        AppState {
            config: test_config(max_concurrent_requests),
            profiles,
            note_writer,
            gate: Arc::new(AdmissionGate::new(max_concurrent_requests)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::test_helpers::test_state;
    use super::*;
    use crate::note::generator::tests::{alice, StaticProfileSource};
    use crate::note::writer::TemplateNoteWriter;

    fn json_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn state_with_alice(max: usize) -> AppState {
        test_state(
            Some(Arc::new(StaticProfileSource::with(vec![alice()]))),
            Arc::new(TemplateNoteWriter),
            max,
        )
    }

    #[tokio::test]
    async fn test_health_reports_load_and_collaborators() {
        let app = build_router(state_with_alice(4));
        let response = app
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["service"], "cheerify");
        assert_eq!(body["profileSourceEnabled"], true);
        assert_eq!(body["aiEnabled"], false);
        assert_eq!(body["activeRequests"], 0);
        assert_eq!(body["maxConcurrentRequests"], 4);
    }

    #[tokio::test]
    async fn test_create_note_composes_for_known_user() {
        let app = build_router(state_with_alice(4));
        let response = app
            .oneshot(json_post("/api/notes", r#"{"username":"@alice"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["username"], "alice");
        assert_eq!(body["source"], "composed");
        assert!(body["note"].as_str().unwrap().starts_with("Hey alice, "));
        assert_eq!(body["traits"]["toneStyle"], "casual");
    }

    #[tokio::test]
    async fn test_create_note_rejects_empty_username() {
        let app = build_router(state_with_alice(4));
        let response = app
            .oneshot(json_post("/api/notes", r#"{"username":"  @ "}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_profile_route_without_source_is_unavailable() {
        let state = test_state(None, Arc::new(TemplateNoteWriter), 4);
        let response = build_router(state)
            .oneshot(
                Request::get("/api/profile/alice")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_profile_route_maps_not_found() {
        let response = build_router(state_with_alice(4))
            .oneshot(
                Request::get("/api/profile/nobody")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_generate_note_with_no_tweets_uses_fallback() {
        let response = build_router(state_with_alice(4))
            .oneshot(json_post(
                "/api/generate-note",
                r#"{"username":"carol","bio":"hi"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["source"], "fallback");
        assert!(body["note"].as_str().unwrap().contains("carol"));
    }

    #[tokio::test]
    async fn test_generate_note_rejects_oversized_topic_list() {
        let response = build_router(state_with_alice(4))
            .oneshot(json_post(
                "/api/generate-note",
                r#"{"username":"alice","tweets":["hello"],"traits":{
                    "isPositive":false,"isHumorous":false,"isTechnical":false,
                    "isCreative":false,"isHelpful":false,"toneStyle":"casual",
                    "topTopics":["tech","design","business","writing","education","community","life"]}}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_generate_note_uses_supplied_traits() {
        let response = build_router(state_with_alice(4))
            .oneshot(json_post(
                "/api/generate-note",
                r#"{"username":"alice","tweets":["hello"],"traits":{
                    "isPositive":false,"isHumorous":false,"isTechnical":false,
                    "isCreative":false,"isHelpful":false,"toneStyle":"enthusiastic",
                    "topTopics":["business"]}}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["source"], "composed");
        assert!(body["note"].as_str().unwrap().starts_with("Wow alice, "));
    }

    #[tokio::test]
    async fn test_gated_request_releases_its_slot() {
        let state = state_with_alice(2);
        let gate = state.gate.clone();
        let app = build_router(state);

        let response = app
            .clone()
            .oneshot(json_post("/api/notes", r#"{"username":"alice"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(gate.active(), 0);

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["activeRequests"], 0);
        assert_eq!(body["maxConcurrentRequests"], 2);
    }

    #[tokio::test]
    async fn test_gated_routes_reject_when_full() {
        let state = state_with_alice(1);
        let _held = state.gate.try_admit().unwrap();
        let app = build_router(state);

        let response = app
            .clone()
            .oneshot(json_post("/api/notes", r#"{"username":"alice"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "TOO_MANY_REQUESTS");

        // health and export stay reachable under load
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_export_pdf_returns_attachment() {
        let response = build_router(state_with_alice(4))
            .oneshot(json_post(
                "/api/export/pdf",
                r#"{"username":"alice","note":"Hey alice, Keep shining!"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/pdf"
        );
        let disposition = response.headers()[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.starts_with("attachment; filename=\"cheerify_alice_"));
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
