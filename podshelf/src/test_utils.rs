//! Test utilities shared by the unit tests of this crate
//!
//! Provides an in-process mock of the Spotify accounts service and Web API,
//! served by axum on an ephemeral port, that counts the requests it receives.

use axum::{
    Json, Router,
    extract::{Form, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::catalog::CatalogConfig;
use crate::oauth2::OAuth2Config;

pub(crate) const VALID_CODE: &str = "abc123";
pub(crate) const VALID_REFRESH_TOKEN: &str = "refresh-token";
pub(crate) const CLIENT_ID: &str = "test-client";
pub(crate) const CLIENT_SECRET: &str = "test-secret";

#[derive(Default)]
pub(crate) struct MockCounters {
    pub(crate) code_exchanges: AtomicUsize,
    pub(crate) refreshes: AtomicUsize,
    pub(crate) show_pages: AtomicUsize,
    pub(crate) episode_pages: AtomicUsize,
}

#[derive(Clone)]
struct MockState {
    base_url: String,
    saved_show_count: usize,
    episode_count: usize,
    counters: Arc<MockCounters>,
}

pub(crate) struct MockSpotify {
    pub(crate) base_url: String,
    pub(crate) counters: Arc<MockCounters>,
}

impl MockSpotify {
    /// Starts a mock serving `saved_show_count` saved shows and `episode_count`
    /// episodes for every show.
    pub(crate) async fn start(saved_show_count: usize, episode_count: usize) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock server");
        let base_url = format!("http://{}", listener.local_addr().expect("local addr"));
        let counters = Arc::new(MockCounters::default());

        let state = MockState {
            base_url: base_url.clone(),
            saved_show_count,
            episode_count,
            counters: counters.clone(),
        };
        let app = Router::new()
            .route("/api/token", post(token))
            .route("/v1/me/shows", get(saved_shows))
            .route("/v1/shows/{id}/episodes", get(show_episodes))
            .with_state(state);

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock server");
        });

        Self { base_url, counters }
    }

    pub(crate) fn oauth2_config(&self) -> OAuth2Config {
        OAuth2Config::new(
            CLIENT_ID.to_string(),
            CLIENT_SECRET.to_string(),
            "http://localhost:3001",
            &self.base_url,
            false,
        )
    }

    pub(crate) fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig::new(&format!("{}/v1", self.base_url), 200)
    }
}

fn has_client_credentials(headers: &HeaderMap) -> bool {
    let expected = format!(
        "Basic {}",
        STANDARD.encode(format!("{CLIENT_ID}:{CLIENT_SECRET}"))
    );
    headers
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .is_some_and(|h| h == expected)
}

fn invalid_grant() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({"error": "invalid_grant"})),
    )
        .into_response()
}

async fn token(
    State(state): State<MockState>,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    if !has_client_credentials(&headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "invalid_client"})),
        )
            .into_response();
    }

    match form.get("grant_type").map(String::as_str) {
        Some("authorization_code") => {
            state.counters.code_exchanges.fetch_add(1, Ordering::SeqCst);
            if form.get("code").map(String::as_str) != Some(VALID_CODE)
                || form.get("redirect_uri").is_none()
            {
                return invalid_grant();
            }
            Json(json!({
                "access_token": "access-from-code",
                "token_type": "Bearer",
                "scope": "user-library-read user-read-playback-position",
                "expires_in": 3600,
                "refresh_token": VALID_REFRESH_TOKEN
            }))
            .into_response()
        }
        Some("refresh_token") => {
            let n = state.counters.refreshes.fetch_add(1, Ordering::SeqCst) + 1;
            if form.get("refresh_token").map(String::as_str) != Some(VALID_REFRESH_TOKEN) {
                return invalid_grant();
            }
            Json(json!({
                "access_token": format!("access-refreshed-{n}"),
                "token_type": "Bearer",
                "scope": "user-library-read user-read-playback-position",
                "expires_in": 3600
            }))
            .into_response()
        }
        _ => invalid_grant(),
    }
}

fn is_authorized(headers: &HeaderMap) -> bool {
    headers
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .is_some_and(|h| h.starts_with("Bearer access"))
}

fn page_window(params: &HashMap<String, String>, total: usize) -> (usize, usize) {
    let limit = params
        .get("limit")
        .and_then(|v| v.parse().ok())
        .unwrap_or(20usize);
    let offset = params
        .get("offset")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0usize);
    (offset.min(total), (offset + limit).min(total))
}

fn page_body(items: Vec<Value>, next: Option<String>, total: usize) -> Value {
    json!({
        "items": items,
        "next": next,
        "total": total
    })
}

async fn saved_shows(
    State(state): State<MockState>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if !is_authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    state.counters.show_pages.fetch_add(1, Ordering::SeqCst);

    let total = state.saved_show_count;
    let (start, end) = page_window(&params, total);
    let items = (start..end)
        .map(|i| {
            json!({
                "added_at": "2024-01-01T00:00:00Z",
                "show": {
                    "id": format!("show{i}"),
                    "name": format!("Show {i}"),
                    "publisher": "Mock Publisher",
                    "description": "A mock show",
                    "total_episodes": state.episode_count,
                    "images": [],
                    "external_urls": {"spotify": format!("https://open.spotify.com/show/show{i}")}
                }
            })
        })
        .collect();
    let next = (end < total).then(|| {
        format!(
            "{}/v1/me/shows?offset={end}&limit={}",
            state.base_url,
            end - start
        )
    });
    Json(page_body(items, next, total)).into_response()
}

async fn show_episodes(
    State(state): State<MockState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if !is_authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    state.counters.episode_pages.fetch_add(1, Ordering::SeqCst);

    let total = state.episode_count;
    let (start, end) = page_window(&params, total);
    let items = (start..end)
        .map(|i| {
            json!({
                "id": format!("{id}-ep{i}"),
                "name": format!("Episode {i}"),
                "description": "A mock episode",
                "release_date": "2024-01-01",
                "duration_ms": 3_600_000,
                "resume_point": {
                    "fully_played": false,
                    "resume_position_ms": 1_500_000
                }
            })
        })
        .collect();
    let next = (end < total).then(|| {
        format!(
            "{}/v1/shows/{id}/episodes?offset={end}&limit={}",
            state.base_url,
            end - start
        )
    });
    Json(page_body(items, next, total)).into_response()
}
