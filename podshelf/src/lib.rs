//! podshelf - Spotify podcast library access for server-rendered web apps
//!
//! This crate keeps a per-session Spotify token usable (authorization code
//! exchange and refresh), walks the paged Web API listings for saved shows and
//! episodes, and stores sessions in memory or Redis. HTTP wiring lives in
//! `podshelf-axum`.

mod catalog;
mod coordination;
mod oauth2;
mod session;
mod storage;
mod utils;

#[cfg(test)]
mod test_utils;

pub use coordination::{
    CoordinationError, begin_authorization, complete_authorization, get_valid_token,
    list_saved_shows_core, list_show_episodes_core,
};

pub use catalog::{
    CatalogConfig, CatalogError, DEFAULT_MAX_PAGES, Episode, EpisodeSummary, Image, PAGE_SIZE, Page,
    ResumePoint, SavedShow, Show, fetch_all, ms_to_minutes,
};

pub use oauth2::{
    AuthResponse, OAuth2Config, OAuth2Error, SPOTIFY_SCOPE, TOKEN_REFRESH_MARGIN_SECS, TokenBundle,
};

pub use session::{Session, SessionError, SessionParams, SessionStore};

pub use storage::StorageError;
pub use utils::UtilError;
