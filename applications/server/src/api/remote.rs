/// Remote-resolution API route
use crate::{
    services::remote::wire::{RemoteRequest, RemoteResponse},
    state::AppState,
};
use axum::{
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use std::any::Any;

/// POST /api/remote - Selection, initiation and queue lifecycle calls
///
/// Never fails at the HTTP level. A body that is not JSON, or JSON that is
/// not a request envelope, gets an `INVALID_REQUEST` error response.
pub async fn handle(State(state): State<AppState>, body: Bytes) -> Json<RemoteResponse> {
    let request = match serde_json::from_slice::<RemoteRequest>(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!(error = %e, "Unrecognized remote envelope");
            return Json(RemoteResponse::unrecognized());
        }
    };

    Json(state.remote.handle(request).await)
}

/// Answer a panic inside the remote adapter with `INVALID_REQUEST`
pub fn recover(panic: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!(panic = super::panic_message(panic.as_ref()), "Remote adapter panicked");
    Json(RemoteResponse::unrecognized()).into_response()
}
