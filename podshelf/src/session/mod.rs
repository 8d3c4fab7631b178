mod config;
mod errors;
mod main;
mod types;

pub use config::SessionParams;
pub use errors::SessionError;
pub use main::SessionStore;
pub use types::Session;
