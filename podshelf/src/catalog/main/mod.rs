mod fetch;
mod spotify;

pub use fetch::fetch_all;
pub(crate) use spotify::{fetch_saved_shows, fetch_show_episodes};
