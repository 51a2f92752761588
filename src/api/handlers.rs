//! HTTP API handlers.

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;
use tracing::debug;

use crate::firebase::FirestoreHandle;

/// Application state shared with handlers.
///
/// The Firestore handle is injected once at startup and read-only after
/// that. It is either fully constructed or explicitly absent, never
/// partially initialized.
#[derive(Clone, Default)]
pub struct AppState {
    /// Firestore client, absent when no credential file was found.
    firestore: Option<Arc<FirestoreHandle>>,
}

impl AppState {
    /// Create app state with an optional Firestore handle.
    pub fn new(firestore: Option<FirestoreHandle>) -> Self {
        Self {
            firestore: firestore.map(Arc::new),
        }
    }

    /// The Firestore handle, if one was connected at startup.
    pub fn firestore(&self) -> Option<&FirestoreHandle> {
        self.firestore.as_deref()
    }

    /// Check whether a Firestore client is attached.
    pub fn has_firestore(&self) -> bool {
        self.firestore.is_some()
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "success".
    pub status: &'static str,
    /// Fixed connectivity message.
    pub message: &'static str,
}

/// Root handler - confirms the process is running.
pub async fn home() -> &'static str {
    "Python Backend is Running!"
}

/// Health check handler - always returns 200 with the fixed payload.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    debug!(firestore = state.has_firestore(), "health check");

    Json(HealthResponse {
        status: "success",
        message: "Python backend is connected!",
    })
}
