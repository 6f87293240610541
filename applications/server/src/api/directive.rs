/// Directive API route
use crate::{
    services::directive::{
        wire::{DirectiveRequest, DirectiveResponse},
        DirectiveAdapter,
    },
    state::AppState,
};
use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;
use std::sync::Arc;

/// POST /api/directive - Intents and audio player events
///
/// Never fails at the HTTP level. A body that cannot be decoded, or a
/// request whose handling panics, is answered with
/// [`DirectiveAdapter::fallback`] for the raw `request.type`.
pub async fn handle(State(state): State<AppState>, body: Bytes) -> Json<DirectiveResponse> {
    let value: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(error = %e, "Directive body is not JSON");
            return Json(DirectiveResponse::empty());
        }
    };

    let kind = value
        .pointer("/request/type")
        .and_then(Value::as_str)
        .map(str::to_owned);

    let request = match serde_json::from_value::<DirectiveRequest>(value) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!(error = %e, kind = ?kind, "Unrecognized directive request");
            return Json(DirectiveAdapter::fallback(kind.as_deref()));
        }
    };

    // A panic stays inside the task, so the fallback can still depend on `kind`.
    let adapter = Arc::clone(&state.directive);
    let response = match tokio::spawn(async move { adapter.handle(request).await }).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(error = %e, kind = ?kind, "Directive adapter panicked");
            DirectiveAdapter::fallback(kind.as_deref())
        }
    };

    Json(response)
}
