use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use http::header::{HeaderMap, SET_COOKIE};
use ring::rand::SecureRandom;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum UtilError {
    #[error("Crypto error: {0}")]
    Crypto(String),

    #[error("Cookie error: {0}")]
    Cookie(String),

    #[error("Http client error: {0}")]
    HttpClient(String),
}

pub(crate) fn gen_random_string(len: usize) -> Result<String, UtilError> {
    let rng = ring::rand::SystemRandom::new();
    let mut bytes = vec![0u8; len];
    rng.fill(&mut bytes)
        .map_err(|_| UtilError::Crypto("Failed to generate random string".to_string()))?;
    Ok(URL_SAFE_NO_PAD.encode(bytes))
}

pub(crate) fn header_set_cookie(
    headers: &mut HeaderMap,
    name: &str,
    value: &str,
    max_age: i64,
    secure: bool,
) -> Result<(), UtilError> {
    let secure_attr = if secure { " Secure;" } else { "" };
    let cookie = format!(
        "{name}={value}; SameSite=Lax;{secure_attr} HttpOnly; Path=/; Max-Age={max_age}"
    );
    headers.append(
        SET_COOKIE,
        cookie
            .parse()
            .map_err(|_| UtilError::Cookie("Failed to parse cookie".to_string()))?,
    );
    Ok(())
}

/// Creates the HTTP client used for calls to the accounts service and the Web API.
///
/// - `timeout`: 30 seconds so a hanging upstream call cannot hold a request forever.
/// - `pool_idle_timeout`: 90 seconds, the reqwest default.
/// - `pool_max_idle_per_host`: 32 idle connections per host.
pub(crate) fn get_client() -> Result<reqwest::Client, UtilError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .pool_idle_timeout(Duration::from_secs(90))
        .pool_max_idle_per_host(32)
        .build()
        .map_err(|e| UtilError::HttpClient(e.to_string()))
}
