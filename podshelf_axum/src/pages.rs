use askama::Template;
use axum::response::Html;
use http::StatusCode;

use podshelf::{Episode, EpisodeSummary, SavedShow};

struct ShowRow<'a> {
    id: &'a str,
    name: &'a str,
    publisher: &'a str,
    image_url: Option<&'a str>,
}

impl<'a> From<&'a SavedShow> for ShowRow<'a> {
    fn from(saved: &'a SavedShow) -> Self {
        Self {
            id: &saved.show.id,
            name: &saved.show.name,
            publisher: &saved.show.publisher,
            image_url: saved.show.images.first().map(|image| image.url.as_str()),
        }
    }
}

#[derive(Template)]
#[template(path = "index.j2", escape = "html")]
struct ShowListTemplate<'a> {
    shows: Vec<ShowRow<'a>>,
}

#[derive(Template)]
#[template(path = "show.j2", escape = "html")]
struct EpisodeListTemplate {
    episodes: Vec<EpisodeSummary>,
}

fn render(template: &impl Template) -> Result<Html<String>, (StatusCode, String)> {
    template.render().map(Html).map_err(|e| {
        tracing::error!("Template error: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    })
}

/// Renders the saved-show list with a link to each show's episodes.
pub fn render_show_list(shows: &[SavedShow]) -> Result<Html<String>, (StatusCode, String)> {
    render(&ShowListTemplate {
        shows: shows.iter().map(ShowRow::from).collect(),
    })
}

/// Renders the episode list with resume point and duration in whole minutes.
pub fn render_episode_list(episodes: &[Episode]) -> Result<Html<String>, (StatusCode, String)> {
    render(&EpisodeListTemplate {
        episodes: episodes.iter().map(EpisodeSummary::from).collect(),
    })
}
