use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::oauth2::TokenBundle;
use crate::session::errors::SessionError;
use crate::storage::CacheData;

/// Per-client session context.
///
/// Loaded from the session store at the start of a request, handed to every
/// operation that reads or changes the token, and written back with
/// [`SessionStore::save`](crate::SessionStore::save). Holds at most one
/// [`TokenBundle`].
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) id: String,
    pub(crate) token: Option<TokenBundle>,
    pub(crate) dirty: bool,
}

impl Session {
    pub(crate) fn new(id: String) -> Self {
        Self {
            id,
            token: None,
            dirty: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn token(&self) -> Option<&TokenBundle> {
        self.token.as_ref()
    }

    /// Replaces the stored token and marks the session for persistence.
    pub fn set_token(&mut self, token: TokenBundle) {
        self.token = Some(token);
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(super) struct StoredSession {
    pub(super) token: Option<TokenBundle>,
    pub(super) expires_at: DateTime<Utc>,
    pub(super) ttl: u64,
}

impl TryFrom<StoredSession> for CacheData {
    type Error = SessionError;

    fn try_from(data: StoredSession) -> Result<Self, Self::Error> {
        let value = serde_json::to_string(&data).map_err(|e| SessionError::Serde(e.to_string()))?;
        Ok(Self { value })
    }
}

impl TryFrom<CacheData> for StoredSession {
    type Error = SessionError;

    fn try_from(data: CacheData) -> Result<Self, Self::Error> {
        serde_json::from_str(&data.value).map_err(|e| SessionError::Serde(e.to_string()))
    }
}
