//! podshelf-axum - HTTP surface for the podshelf library
//!
//! Provides the router serving the saved-show list, the per-show episode
//! list, and the `/verify` and `/callback` steps of the authorization code
//! flow. Pages are rendered server-side with askama.

mod error;
mod handlers;
mod pages;
mod router;
mod session;
mod state;

pub use error::IntoResponseError;
pub use pages::{render_episode_list, render_show_list};
pub use router::{podshelf_router, podshelf_router_no_trace};
pub use session::{AuthRedirect, SessionContext};
pub use state::AppState;
