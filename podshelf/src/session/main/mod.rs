mod cookie;
mod session;

pub use session::SessionStore;
