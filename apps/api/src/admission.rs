//! Admission control: a fixed ceiling on in-flight requests.
//!
//! A request holds a semaphore permit from entry until its response is produced.
//! When every permit is taken the request is rejected with 429; nothing is queued.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::state::AppState;

/// Counts in-flight requests against a fixed ceiling.
#[derive(Debug)]
pub struct AdmissionGate {
    permits: Arc<Semaphore>,
    max: usize,
}

impl AdmissionGate {
    pub fn new(max: usize) -> Self {
        Self {
            permits: Arc::new(Semaphore::new(max)),
            max,
        }
    }

    /// Takes a slot if one is free. The slot is released when the permit drops.
    pub fn try_admit(&self) -> Option<OwnedSemaphorePermit> {
        self.permits.clone().try_acquire_owned().ok()
    }

    pub fn active(&self) -> usize {
        self.max - self.permits.available_permits()
    }

    pub fn max(&self) -> usize {
        self.max
    }
}

/// Middleware enforcing `AppState::gate` on the routes it wraps.
pub async fn admission_control(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(permit) = state.gate.try_admit() else {
        warn!(
            "Rejecting {} {}: {}/{} requests in flight",
            req.method(),
            req.uri().path(),
            state.gate.active(),
            state.gate.max()
        );
        return Err(AppError::TooManyRequests(format!(
            "The server is currently handling {} requests. Please try again in a moment.",
            state.gate.max()
        )));
    };

    debug!(
        "Active requests: {}/{}",
        state.gate.active(),
        state.gate.max()
    );

    let response = next.run(req).await;
    drop(permit);

    debug!(
        "Request completed. Active requests: {}/{}",
        state.gate.active(),
        state.gate.max()
    );

    Ok(response)
}
