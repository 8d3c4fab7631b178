//! Read-only access to the user's podcast library on the Web API
//!
//! Listing endpoints are paged; [`fetch_all`] walks every page of one listing
//! and the typed wrappers in `main::spotify` bind it to the saved-shows and
//! show-episodes endpoints.

mod config;
mod errors;
mod main;
mod types;

pub use config::{CatalogConfig, DEFAULT_MAX_PAGES, PAGE_SIZE};
pub use errors::CatalogError;
pub use main::fetch_all;
pub use types::{
    Episode, EpisodeSummary, Image, Page, ResumePoint, SavedShow, Show, ms_to_minutes,
};

pub(crate) use main::{fetch_saved_shows, fetch_show_episodes};
