use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use http::{HeaderMap, StatusCode};

use podshelf::{
    AuthResponse, CoordinationError, Session, TokenBundle, begin_authorization,
    complete_authorization, get_valid_token, list_saved_shows_core, list_show_episodes_core,
};

use super::error::IntoResponseError;
use super::pages::{render_episode_list, render_show_list};
use super::session::{AuthRedirect, SessionContext};
use super::state::AppState;

/// Makes the session's token usable and persists the session.
///
/// `None` means the session holds no token and the caller should redirect.
async fn authorize(
    state: &AppState,
    session: &mut Session,
) -> Result<Option<(TokenBundle, HeaderMap)>, (StatusCode, String)> {
    let (token, authorized) = get_valid_token(session, &state.oauth2)
        .await
        .into_response_error()?;
    if !authorized {
        return Ok(None);
    }

    let headers = state.sessions.save(session).await.into_response_error()?;
    Ok(Some((token, headers)))
}

pub(super) async fn index(
    State(state): State<AppState>,
    SessionContext(mut session): SessionContext,
) -> Result<Response, (StatusCode, String)> {
    let Some((token, headers)) = authorize(&state, &mut session).await? else {
        return Ok(AuthRedirect.into_response());
    };

    let shows = list_saved_shows_core(&state.catalog, &token)
        .await
        .into_response_error()?;
    let html = render_show_list(&shows)?;
    Ok((headers, html).into_response())
}

pub(super) async fn show_detail(
    State(state): State<AppState>,
    Path(show_id): Path<String>,
    SessionContext(mut session): SessionContext,
) -> Result<Response, (StatusCode, String)> {
    let Some((token, headers)) = authorize(&state, &mut session).await? else {
        return Ok(AuthRedirect.into_response());
    };

    let episodes = list_show_episodes_core(&state.catalog, &token, &show_id)
        .await
        .into_response_error()?;
    let html = render_episode_list(&episodes)?;
    Ok((headers, html).into_response())
}

pub(super) async fn verify(
    State(state): State<AppState>,
) -> Result<Redirect, (StatusCode, String)> {
    let auth_url = begin_authorization(&state.oauth2).into_response_error()?;
    Ok(Redirect::to(&auth_url))
}

pub(super) async fn callback(
    State(state): State<AppState>,
    Query(auth_response): Query<AuthResponse>,
    SessionContext(mut session): SessionContext,
) -> Result<(HeaderMap, Redirect), (StatusCode, String)> {
    if let Some(error) = auth_response.error {
        return Err(CoordinationError::AuthorizationDenied(error)).into_response_error();
    }

    complete_authorization(
        &state.sessions,
        &mut session,
        &state.oauth2,
        auth_response.code.as_deref(),
    )
    .await
    .into_response_error()?;

    let headers = state.sessions.save(&mut session).await.into_response_error()?;
    Ok((headers, Redirect::to("/")))
}
