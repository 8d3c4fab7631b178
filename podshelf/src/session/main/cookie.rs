use headers::{Cookie, HeaderMapExt};
use http::HeaderMap;

use crate::session::config::SessionParams;
use crate::session::errors::SessionError;
use crate::utils::header_set_cookie;

pub(super) fn get_session_id_from_headers(
    headers: &HeaderMap,
    cookie_name: &str,
) -> Option<String> {
    let Some(cookies) = headers.typed_get::<Cookie>() else {
        tracing::debug!("No cookie header found");
        return None;
    };

    let session_id = cookies.get(cookie_name).map(str::to_string);
    if session_id.is_none() {
        tracing::debug!("No session cookie '{}' found in cookies", cookie_name);
    }
    session_id
}

pub(super) fn session_cookie_header(
    params: &SessionParams,
    session_id: &str,
) -> Result<HeaderMap, SessionError> {
    let mut headers = HeaderMap::new();
    header_set_cookie(
        &mut headers,
        &params.cookie_name,
        session_id,
        params.cookie_max_age as i64,
        params.secure,
    )?;
    Ok(headers)
}
