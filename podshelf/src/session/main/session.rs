use chrono::{Duration, Utc};
use http::HeaderMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::session::config::SessionParams;
use crate::session::errors::SessionError;
use crate::session::types::{Session, StoredSession};
use crate::storage::{CacheData, CacheStore, InMemoryCacheStore, cache_store_from_env};
use crate::utils::gen_random_string;

use super::cookie::{get_session_id_from_headers, session_cookie_header};

const SESSION_PREFIX: &str = "session";

/// Server-side session storage keyed by the session cookie.
///
/// Cloning is cheap; all clones share the same backing store.
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<Mutex<Box<dyn CacheStore>>>,
    params: SessionParams,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Builds the store selected by `SESSION_STORE_TYPE` with cookie settings from the environment.
    pub async fn from_env() -> Result<Self, SessionError> {
        let store = cache_store_from_env().await?;
        Ok(Self {
            store: Arc::new(Mutex::new(store)),
            params: SessionParams::from_env()?,
        })
    }

    /// In-process store, used by tests and single-instance deployments.
    pub fn in_memory(params: SessionParams) -> Self {
        Self {
            store: Arc::new(Mutex::new(Box::new(InMemoryCacheStore::new()))),
            params,
        }
    }

    /// Loads the session named by the request's session cookie.
    ///
    /// A missing cookie, an unknown id, or an expired record all yield a fresh
    /// session with a new id; the caller persists it with [`SessionStore::save`].
    pub async fn load(&self, headers: &HeaderMap) -> Result<Session, SessionError> {
        if let Some(session_id) = get_session_id_from_headers(headers, &self.params.cookie_name) {
            let cached = self
                .store
                .lock()
                .await
                .get(SESSION_PREFIX, &session_id)
                .await?;

            if let Some(cached) = cached {
                let stored: StoredSession = cached.try_into()?;
                if stored.expires_at > Utc::now() {
                    return Ok(Session {
                        id: session_id,
                        token: stored.token,
                        dirty: false,
                    });
                }
                tracing::debug!("Session expired at {}", stored.expires_at);
            } else {
                tracing::debug!("Session id from cookie not found in store");
            }
        }

        Ok(Session::new(gen_random_string(32)?))
    }

    /// Persists a dirty session and returns the `Set-Cookie` header for it.
    ///
    /// A clean session is left untouched and an empty header map is returned.
    pub async fn save(&self, session: &mut Session) -> Result<HeaderMap, SessionError> {
        if !session.dirty {
            return Ok(HeaderMap::new());
        }

        let ttl = self.params.cookie_max_age;
        let out_of_range =
            || SessionError::Config(format!("Session max age {ttl}s is out of range"));
        let expires_at = i64::try_from(ttl)
            .ok()
            .and_then(Duration::try_seconds)
            .and_then(|lifetime| Utc::now().checked_add_signed(lifetime))
            .ok_or_else(out_of_range)?;
        let cache_ttl = usize::try_from(ttl).map_err(|_| out_of_range())?;

        let stored = StoredSession {
            token: session.token.clone(),
            expires_at,
            ttl,
        };
        let data: CacheData = stored.try_into()?;

        self.store
            .lock()
            .await
            .put_with_ttl(SESSION_PREFIX, &session.id, data, cache_ttl)
            .await?;
        session.dirty = false;

        session_cookie_header(&self.params, &session.id)
    }

    /// Invalidates the session: deletes the stored record and starts over
    /// under a new id with no token.
    pub async fn clear(&self, session: &mut Session) -> Result<(), SessionError> {
        self.store
            .lock()
            .await
            .remove(SESSION_PREFIX, &session.id)
            .await?;

        session.id = gen_random_string(32)?;
        session.token = None;
        session.dirty = true;
        Ok(())
    }
}
