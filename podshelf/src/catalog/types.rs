use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One page of a listing endpoint. `next` is `None` on the last page.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next: Option<String>,
    pub total: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    pub id: String,
    pub name: String,
    pub publisher: String,
    pub description: Option<String>,
    pub total_episodes: Option<u32>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub external_urls: HashMap<String, String>,
}

/// Item of the saved-shows listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedShow {
    pub added_at: String,
    pub show: Show,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumePoint {
    pub resume_position_ms: u64,
    pub fully_played: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub release_date: Option<String>,
    pub duration_ms: u64,
    pub resume_point: ResumePoint,
}

/// Episode shaped for display, with positions converted to whole minutes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpisodeSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub release_date: String,
    pub fully_played: bool,
    pub resume_point_minutes: u64,
    pub duration_minutes: u64,
}

impl From<&Episode> for EpisodeSummary {
    fn from(episode: &Episode) -> Self {
        Self {
            id: episode.id.clone(),
            name: episode.name.clone(),
            description: episode.description.clone().unwrap_or_default(),
            release_date: episode.release_date.clone().unwrap_or_default(),
            fully_played: episode.resume_point.fully_played,
            resume_point_minutes: ms_to_minutes(episode.resume_point.resume_position_ms),
            duration_minutes: ms_to_minutes(episode.duration_ms),
        }
    }
}

/// Converts milliseconds to whole minutes, rounding half to even.
pub fn ms_to_minutes(ms: u64) -> u64 {
    (ms as f64 / 60_000.0).round_ties_even() as u64
}
