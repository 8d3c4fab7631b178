//! Mock Spotify accounts service and Web API for router tests
//!
//! Every test starts its own server on an ephemeral port, so tests run in
//! parallel without sharing counters.

use axum::{
    Json, Router,
    body::Body,
    extract::{Form, Path, Query, State},
    http::{HeaderMap, Request, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tower::ServiceExt;

use podshelf::{CatalogConfig, OAuth2Config, SessionParams, SessionStore};
use podshelf_axum::{AppState, podshelf_router_no_trace};

pub const VALID_CODE: &str = "abc123";
pub const VALID_REFRESH_TOKEN: &str = "refresh-token";
pub const COOKIE_NAME: &str = "sid";

#[derive(Default)]
pub struct Counters {
    pub code_exchanges: AtomicUsize,
    pub refreshes: AtomicUsize,
    pub api_pages: AtomicUsize,
}

#[derive(Clone)]
struct MockState {
    show_count: usize,
    episode_count: usize,
    counters: Arc<Counters>,
}

pub struct TestApp {
    pub state: AppState,
    pub router: Router,
    pub base_url: String,
    pub counters: Arc<Counters>,
}

impl TestApp {
    pub async fn start(show_count: usize, episode_count: usize) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock server");
        let base_url = format!("http://{}", listener.local_addr().expect("local addr"));
        let counters = Arc::new(Counters::default());

        let mock = Router::new()
            .route("/api/token", post(token))
            .route("/v1/me/shows", get(saved_shows))
            .route("/v1/shows/{id}/episodes", get(episodes))
            .with_state(MockState {
                show_count,
                episode_count,
                counters: counters.clone(),
            });
        tokio::spawn(async move {
            axum::serve(listener, mock).await.expect("mock server");
        });

        let state = AppState::new(
            OAuth2Config::new(
                "test-client".to_string(),
                "test-secret".to_string(),
                "http://localhost:3001",
                &base_url,
                false,
            ),
            CatalogConfig::new(&format!("{base_url}/v1"), 200),
            SessionStore::in_memory(SessionParams {
                cookie_name: COOKIE_NAME.to_string(),
                cookie_max_age: 600,
                secure: false,
            }),
        );
        let router = podshelf_router_no_trace(state.clone());

        Self {
            state,
            router,
            base_url,
            counters,
        }
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> Response {
        let mut request = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        self.router
            .clone()
            .oneshot(request.body(Body::empty()).expect("request"))
            .await
            .expect("infallible")
    }
}

/// `name=value` pair of the first Set-Cookie header.
pub fn session_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)?
        .to_str()
        .ok()?
        .split(';')
        .next()
        .map(str::to_string)
}

pub fn location(response: &Response) -> Option<&str> {
    response.headers().get(header::LOCATION)?.to_str().ok()
}

pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

async fn token(
    State(state): State<MockState>,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    let has_basic_auth = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .is_some_and(|h| h.starts_with("Basic "));
    if !has_basic_auth {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let invalid_grant = (
        StatusCode::BAD_REQUEST,
        Json(json!({"error": "invalid_grant"})),
    );
    match form.get("grant_type").map(String::as_str) {
        Some("authorization_code") => {
            state.counters.code_exchanges.fetch_add(1, Ordering::SeqCst);
            if form.get("code").map(String::as_str) != Some(VALID_CODE) {
                return invalid_grant.into_response();
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
            state.counters.refreshes.fetch_add(1, Ordering::SeqCst);
            if form.get("refresh_token").map(String::as_str) != Some(VALID_REFRESH_TOKEN) {
                return invalid_grant.into_response();
            }
            Json(json!({
                "access_token": "access-refreshed",
                "token_type": "Bearer",
                "expires_in": 3600
            }))
            .into_response()
        }
        _ => invalid_grant.into_response(),
    }
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .is_some_and(|h| h.starts_with("Bearer access"))
}

fn page(params: &HashMap<String, String>, total: usize, item: impl Fn(usize) -> Value) -> Value {
    let limit: usize = params.get("limit").and_then(|v| v.parse().ok()).unwrap_or(20);
    let offset: usize = params.get("offset").and_then(|v| v.parse().ok()).unwrap_or(0);
    let end = (offset + limit).min(total);
    json!({
        "items": (offset.min(end)..end).map(item).collect::<Vec<_>>(),
        "next": (end < total).then(|| format!("offset={end}")),
        "total": total
    })
}

async fn saved_shows(
    State(state): State<MockState>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    state.counters.api_pages.fetch_add(1, Ordering::SeqCst);
    Json(page(&params, state.show_count, |i| {
        json!({
            "added_at": "2024-01-01T00:00:00Z",
            "show": {
                "id": format!("show{i}"),
                "name": format!("Show {i}"),
                "publisher": "Mock Publisher",
                "images": [],
                "external_urls": {}
            }
        })
    }))
    .into_response()
}

async fn episodes(
    State(state): State<MockState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    state.counters.api_pages.fetch_add(1, Ordering::SeqCst);
    Json(page(&params, state.episode_count, |i| {
        json!({
            "id": format!("{id}-ep{i}"),
            "name": format!("Episode {i}"),
            "release_date": "2024-01-01",
            "duration_ms": 3_600_000,
            "resume_point": {"fully_played": false, "resume_position_ms": 1_500_000}
        })
    }))
    .into_response()
}
