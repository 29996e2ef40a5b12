use super::{
    dto::{UserDto, UserRole},
    session::{get_session_token_from_request_headers, SessionToken},
};
use crate::{
    modules::common::{
        error_codes::{ADMIN_ONLY, INVALID_SESSION, NO_SID_COOKIE},
        responses::{internal_error_msg, SimpleError},
    },
    server::controller::AppState,
};
use axum::{extract::State, response::Response, Extension};
use http::StatusCode;

/// Extractor for the authenticated user of the request session
#[derive(Clone)]
pub struct RequestUser(pub UserDto);

/// middleware for routes that require a signed in user, this queries the DB to get
/// the request user by his session token cookie, so use it only within routes that
/// need the user data, adds the following extensions:
///
/// - `RequestUser`
/// - `SessionToken`
pub async fn require_user<B>(
    State(state): State<AppState>,
    mut req: http::Request<B>,
    next: axum::middleware::Next<B>,
) -> Result<Response, (StatusCode, SimpleError)> {
    let session_id = get_session_token_from_request_headers(req.headers())
        .ok_or((StatusCode::UNAUTHORIZED, SimpleError::from(NO_SID_COOKIE)))?;

    let session_token = SessionToken::from(session_id);

    let maybe_user = state
        .auth_service
        .get_user_from_session_token(session_token)
        .await
        .or(Err(internal_error_msg("failed to fetch user session")))?;

    match maybe_user {
        Some(user) => {
            req.extensions_mut().insert(session_token);
            req.extensions_mut().insert(RequestUser(UserDto::from(user)));

            Ok(next.run(req).await)
        }
        None => Err((StatusCode::UNAUTHORIZED, SimpleError::from(INVALID_SESSION))),
    }
}

/// middleware for routers that are admin only, must be layered after `require_user`
pub async fn require_admin<B>(
    Extension(req_user): Extension<RequestUser>,
    req: http::Request<B>,
    next: axum::middleware::Next<B>,
) -> Result<Response, (StatusCode, SimpleError)> {
    assert_admin(&req_user.0)?;

    Ok(next.run(req).await)
}

/// checks the request user has the admin role, for handlers that guard a single
/// destructive operation inside a otherwise staff accessible router
pub fn assert_admin(user: &UserDto) -> Result<(), (StatusCode, SimpleError)> {
    if user.role != UserRole::Admin {
        return Err((StatusCode::FORBIDDEN, SimpleError::from(ADMIN_ONLY)));
    }

    Ok(())
}
