use std::env;

use super::errors::SessionError;

/// Cookie and lifetime settings for server-side sessions
#[derive(Clone, Debug)]
pub struct SessionParams {
    pub cookie_name: String,
    pub cookie_max_age: u64,
    pub secure: bool,
}

const DEFAULT_SESSION_COOKIE_MAX_AGE: u64 = 3600;

/// Browsers cap cookie lifetimes at 400 days.
const MAX_SESSION_COOKIE_MAX_AGE: u64 = 400 * 24 * 60 * 60;

impl SessionParams {
    /// Reads `SESSION_COOKIE_NAME` and `SESSION_COOKIE_MAX_AGE`.
    ///
    /// Cookies are marked `Secure` when `ORIGIN` is https. The default cookie
    /// name carries the `__Host-` prefix only in that case, since browsers
    /// reject `__Host-` cookies without `Secure`.
    pub fn from_env() -> Result<Self, SessionError> {
        let secure = env::var("ORIGIN")
            .map(|origin| origin.starts_with("https://"))
            .unwrap_or(false);
        Self::resolve(
            env::var("SESSION_COOKIE_NAME").ok(),
            env::var("SESSION_COOKIE_MAX_AGE").ok(),
            secure,
        )
    }

    fn resolve(
        name: Option<String>,
        max_age: Option<String>,
        secure: bool,
    ) -> Result<Self, SessionError> {
        let cookie_name = name.unwrap_or_else(|| {
            if secure {
                "__Host-PodshelfSession".to_string()
            } else {
                "PodshelfSession".to_string()
            }
        });

        let cookie_max_age = match max_age {
            Some(value) => value.parse::<u64>().map_err(|_| {
                SessionError::Config(format!("SESSION_COOKIE_MAX_AGE is not a number: {value}"))
            })?,
            None => DEFAULT_SESSION_COOKIE_MAX_AGE,
        };
        if !(1..=MAX_SESSION_COOKIE_MAX_AGE).contains(&cookie_max_age) {
            return Err(SessionError::Config(format!(
                "SESSION_COOKIE_MAX_AGE must be between 1 and {} seconds, got {}",
                MAX_SESSION_COOKIE_MAX_AGE, cookie_max_age
            )));
        }

        Ok(Self {
            cookie_name,
            cookie_max_age,
            secure,
        })
    }
}
