//! Request-level operations
//!
//! Each function here is what one HTTP handler needs: it takes the caller's
//! [`Session`](crate::Session) and configuration explicitly and composes the
//! oauth2, session and catalog modules.
//!
//! - `authorization`: starting and completing the authorization code flow
//! - `token`: keeping the session's access token usable
//! - `library`: reading the saved shows and their episodes
//! - `errors`: the error type every operation here returns

mod authorization;
mod errors;
mod library;
mod token;

pub use authorization::{begin_authorization, complete_authorization};
pub use errors::CoordinationError;
pub use library::{list_saved_shows_core, list_show_episodes_core};
pub use token::get_valid_token;
