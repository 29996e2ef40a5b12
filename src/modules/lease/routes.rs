use super::dto::{CollectLeaseDto, ListLeaseCollectionsQuery};
use super::repository;
use crate::database::models::LeaseCollection;
use crate::modules::auth;
use crate::modules::common::extractors::ValidatedJson;
use crate::modules::common::responses::SimpleError;
use crate::server::controller::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::{get, put},
    Json, Router,
};
use http::StatusCode;

pub fn create_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_collections))
        .route("/:id/collect", put(collect))
        .layer(axum::middleware::from_fn_with_state(
            state,
            auth::middleware::require_user,
        ))
}

/// Lists amounts due from leasing companies
#[utoipa::path(
    get,
    path = "/lease-collection",
    tag = "lease-collection",
    security(("session_id" = [])),
    params(ListLeaseCollectionsQuery),
    responses((status = OK, body = Vec<LeaseCollection>)),
)]
pub async fn list_collections(
    State(state): State<AppState>,
    Query(query): Query<ListLeaseCollectionsQuery>,
) -> Result<Json<Vec<LeaseCollection>>, (StatusCode, SimpleError)> {
    let conn = &mut state.get_db_conn().await?;

    let collections = repository::list_collections(conn, query.collected).await?;

    Ok(Json(collections))
}

/// Records the settlement of a lease collection
#[utoipa::path(
    put,
    path = "/lease-collection/{id}/collect",
    tag = "lease-collection",
    security(("session_id" = [])),
    params(("id" = i32, Path)),
    request_body = CollectLeaseDto,
    responses(
        (status = OK, body = LeaseCollection),
        (status = NOT_FOUND, body = SimpleError),
    ),
)]
pub async fn collect(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<CollectLeaseDto>,
) -> Result<Json<LeaseCollection>, (StatusCode, SimpleError)> {
    let conn = &mut state.get_db_conn().await?;

    let collection = repository::mark_collected(conn, id, &dto).await?;

    Ok(Json(collection))
}
