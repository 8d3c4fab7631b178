//! Router for the podshelf pages and the authorization endpoints

use axum::{Router, routing::get};
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use super::handlers::{callback, index, show_detail, verify};
use super::state::AppState;

/// Create the application router with request tracing
///
/// Routes:
/// - `/` saved shows
/// - `/show/{show_id}` episodes of one show
/// - `/verify` redirect to the Spotify consent page
/// - `/callback` return point of the authorization flow
pub fn podshelf_router(state: AppState) -> Router {
    podshelf_router_no_trace(state).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            ),
    )
}

/// Same as [`podshelf_router`] without the HTTP tracing middleware.
pub fn podshelf_router_no_trace(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/show/{show_id}", get(show_detail))
        .route("/verify", get(verify))
        .route("/callback", get(callback))
        .with_state(state)
}
