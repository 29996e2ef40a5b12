use super::dto::{self, UserDto};
use super::middleware::RequestUser;
use super::session::{OptionalSessionToken, SessionToken};
use crate::modules::common::extractors::ValidatedJson;
use crate::modules::common::responses::{internal_error_msg, internal_error_res, SimpleError};
use crate::server::controller::AppState;
use axum::headers::UserAgent;
use axum::{
    extract::State,
    routing::{get, post},
    Extension, Json, Router, TypedHeader,
};
use axum_client_ip::SecureClientIp;
use http::{HeaderMap, StatusCode};

pub fn create_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/me", get(me))
        .route("/sign-out", post(sign_out))
        .layer(axum::middleware::from_fn_with_state(
            state,
            super::middleware::require_user,
        ))
        .route("/sign-in", post(sign_in))
}

/// Returns the request user
///
/// the request user is the user that owns the session on the session id (sid) cookie
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "auth",
    security(("session_id" = [])),
    responses(
        (status = OK, body = UserDto),
        (status = UNAUTHORIZED, description = "invalid or expired session", body = SimpleError),
    ),
)]
pub async fn me(req_user: Extension<RequestUser>) -> Json<UserDto> {
    Json(req_user.0 .0.clone())
}

/// Signs in
///
/// Sign in by credentials (email, password)
#[utoipa::path(
    post,
    path = "/auth/sign-in",
    tag = "auth",
    request_body = SignIn,
    responses(
        (
            status = OK,
            description = "sign in successful",
            body = SignInResponse,
            headers(("Set-Cookie" = String, description = "new session id cookie"))
        ),
        (status = BAD_REQUEST, description = "invalid dto", body = SimpleError),
        (status = NOT_FOUND, description = "user with email not found", body = SimpleError),
        (status = UNAUTHORIZED, description = "invalid password", body = SimpleError),
    ),
)]
pub async fn sign_in(
    client_ip: SecureClientIp,
    old_session_token: OptionalSessionToken,
    State(state): State<AppState>,
    TypedHeader(user_agent): TypedHeader<UserAgent>,
    ValidatedJson(payload): ValidatedJson<dto::SignIn>,
) -> Result<(HeaderMap, Json<dto::SignInResponse>), (StatusCode, SimpleError)> {
    use super::service::UserFromCredentialsError as Err;

    let user = state
        .auth_service
        .get_user_from_credentials(payload.email, payload.password)
        .await
        .map_err(|e| match e {
            Err::NotFound => (StatusCode::NOT_FOUND, SimpleError::from("user not found")),
            Err::InternalError => internal_error_res(),
            Err::InvalidPassword => (
                StatusCode::UNAUTHORIZED,
                SimpleError::from("invalid password"),
            ),
        })?;

    let session_token = state
        .auth_service
        .new_session(user.id, client_ip.0, user_agent.to_string())
        .await
        .or(Err(internal_error_msg("failed to create session")))?;

    // a sign in over a existing session replaces it
    if let Some(old_ses_token) = old_session_token.get_value() {
        state.auth_service.delete_session(old_ses_token).await.ok();
    }

    let mut headers = HeaderMap::new();
    headers.insert("Set-Cookie", session_token.into_set_cookie_header());

    let res_body = dto::SignInResponse {
        user: UserDto::from(user),
    };

    Ok((headers, Json(res_body)))
}

/// Signs out of the current user session
///
/// signs out by deleting the user session present in the sid (session id)
/// request cookie
#[utoipa::path(
    post,
    path = "/auth/sign-out",
    tag = "auth",
    security(("session_id" = [])),
    responses(
        (
            status = OK,
            description = "sign out successful",
            headers(("Set-Cookie" = String, description = "expired cookie sid, so the client browser deletes the cookie"))
        ),
        (status = UNAUTHORIZED, description = "session not found", body = SimpleError),
    ),
)]
pub async fn sign_out(
    session: Extension<SessionToken>,
    State(state): State<AppState>,
) -> Result<(StatusCode, HeaderMap), (StatusCode, SimpleError)> {
    let session_token = session.0;

    state
        .auth_service
        .delete_session(session_token)
        .await
        .or(Err(internal_error_msg("failed to delete session")))?;

    let mut headers = HeaderMap::new();
    headers.insert("Set-Cookie", session_token.into_delete_cookie_header());

    Ok((StatusCode::OK, headers))
}
