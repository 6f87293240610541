/// API route modules
pub mod directive;
pub mod health;
pub mod remote;

use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::any::Any;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the HTTP router
///
/// Each protocol route recovers from adapter panics with its own
/// unrecognized-request response. The remote route does it with a
/// catch-panic layer; the directive handler runs its adapter in a task so
/// the fallback can depend on the request type.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(health::health))
        .route(
            "/remote",
            post(remote::handle).layer(CatchPanicLayer::custom(remote::recover)),
        )
        .route("/directive", post(directive::handle));

    Router::new()
        .nest("/api", api)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic"
    }
}
