mod core;
mod spotify;

pub(crate) use core::build_authorize_url;
pub(crate) use spotify::{exchange_code_for_token, refresh_access_token};
