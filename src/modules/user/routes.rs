use super::dto::CreateUserDto;
use super::repository;
use crate::modules::auth;
use crate::modules::auth::dto::UserDto;
use crate::modules::common::error_codes::EMAIL_IN_USE;
use crate::modules::common::extractors::ValidatedJson;
use crate::modules::common::responses::{internal_error_res, SimpleError};
use crate::server::controller::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use http::StatusCode;

pub fn create_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .layer(axum::middleware::from_fn(auth::middleware::require_admin))
        .layer(axum::middleware::from_fn_with_state(
            state,
            auth::middleware::require_user,
        ))
}

/// Lists the dashboard users
#[utoipa::path(
    get,
    path = "/user",
    tag = "user",
    security(("session_id" = [])),
    responses(
        (status = OK, body = Vec<UserDto>),
        (status = UNAUTHORIZED, description = "invalid or expired session", body = SimpleError),
        (status = FORBIDDEN, description = "request user is not a admin", body = SimpleError),
    ),
)]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserDto>>, (StatusCode, SimpleError)> {
    let conn = &mut state.get_db_conn().await?;

    let users = repository::list_users(conn).await?;

    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

/// Creates a dashboard user with a role
#[utoipa::path(
    post,
    path = "/user",
    tag = "user",
    security(("session_id" = [])),
    request_body = CreateUserDto,
    responses(
        (status = OK, body = UserDto),
        (status = BAD_REQUEST, description = "invalid dto / EMAIL_IN_USE", body = SimpleError),
        (status = FORBIDDEN, description = "request user is not a admin", body = SimpleError),
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserDto>,
) -> Result<Json<UserDto>, (StatusCode, SimpleError)> {
    let email_in_use = state
        .auth_service
        .check_email_in_use(&payload.email)
        .await
        .or(Err(internal_error_res()))?;

    if email_in_use {
        return Err((StatusCode::BAD_REQUEST, SimpleError::from(EMAIL_IN_USE)));
    }

    let created_user = state
        .auth_service
        .register_user(&payload.email, &payload.password, payload.role)
        .await
        .or(Err(internal_error_res()))?;

    Ok(Json(UserDto::from(created_user)))
}
