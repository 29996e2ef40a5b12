use super::dto::{OpenSaleDto, SaleDetailsDto};
use super::{repository, service};
use crate::database::models::Sale;
use crate::modules::auth;
use crate::modules::common::extractors::ValidatedJson;
use crate::modules::common::responses::{internal_error_msg, SimpleError};
use crate::modules::{advance, vehicle};
use crate::pricing;
use crate::server::controller::AppState;
use crate::services::pdf::{self, summary};
use axum::response::Response;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use http::StatusCode;

pub fn create_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/:chassis_number", get(get_sale).post(open_sale))
        .route("/:chassis_number/confirm", post(confirm_sale))
        .route("/:chassis_number/cancel", post(cancel_sale))
        .route("/:chassis_number/summary", get(generate_summary))
        .layer(axum::middleware::from_fn_with_state(
            state,
            auth::middleware::require_user,
        ))
}

async fn load_details(
    state: &AppState,
    chassis_number: &str,
) -> Result<SaleDetailsDto, (StatusCode, SimpleError)> {
    let conn = &mut state.get_db_conn().await?;

    let sale = repository::find_by_chassis(conn, chassis_number)
        .await?
        .ok_or((StatusCode::NOT_FOUND, SimpleError::from("entity not found")))?;

    let transaction_detail = repository::find_detail_by_chassis(conn, chassis_number).await?;

    let payments = advance::repository::list_payments(conn, chassis_number).await?;
    let amounts: Vec<f64> = payments.iter().map(|p| p.amount_lkr).collect();
    let total_advance = pricing::total_advance(&amounts);

    let settlement = service::settlement_of(&sale, transaction_detail.as_ref(), total_advance);

    Ok(SaleDetailsDto {
        sale,
        transaction_detail,
        settlement,
    })
}

/// Marks a vehicle as sold
///
/// opens a pending sale with the profit snapshotted from the current vehicle
/// totals, writes the optional transaction detail and lease collection, then
/// flips the vehicle to sold, the sale stays pending until confirmed
#[utoipa::path(
    post,
    path = "/sale/{chassis_number}",
    tag = "sale",
    security(("session_id" = [])),
    params(("chassis_number" = String, Path)),
    request_body = OpenSaleDto,
    responses(
        (status = OK, body = Sale),
        (
            status = BAD_REQUEST,
            description = "invalid dto / INVALID_STATUS_TRANSITION / vehicle already has a sale",
            body = SimpleError,
        ),
        (status = NOT_FOUND, body = SimpleError),
    ),
)]
pub async fn open_sale(
    State(state): State<AppState>,
    Path(chassis_number): Path<String>,
    ValidatedJson(dto): ValidatedJson<OpenSaleDto>,
) -> Result<Json<Sale>, (StatusCode, SimpleError)> {
    let conn = &mut state.get_db_conn().await?;

    let sale = service::open_sale(conn, &chassis_number, &dto)
        .await
        .map_err(<(StatusCode, SimpleError)>::from)?;

    Ok(Json(sale))
}

/// Confirms a pending sale
#[utoipa::path(
    post,
    path = "/sale/{chassis_number}/confirm",
    tag = "sale",
    security(("session_id" = [])),
    params(("chassis_number" = String, Path)),
    responses(
        (status = OK, body = Sale),
        (status = BAD_REQUEST, description = "SALE_NOT_PENDING", body = SimpleError),
        (status = NOT_FOUND, body = SimpleError),
    ),
)]
pub async fn confirm_sale(
    State(state): State<AppState>,
    Path(chassis_number): Path<String>,
) -> Result<Json<Sale>, (StatusCode, SimpleError)> {
    let conn = &mut state.get_db_conn().await?;

    let sale = service::confirm_sale(conn, &chassis_number)
        .await
        .map_err(<(StatusCode, SimpleError)>::from)?;

    Ok(Json(sale))
}

/// Cancels a pending sale, restoring the vehicle to stock
#[utoipa::path(
    post,
    path = "/sale/{chassis_number}/cancel",
    tag = "sale",
    security(("session_id" = [])),
    params(("chassis_number" = String, Path)),
    responses(
        (status = OK),
        (status = BAD_REQUEST, description = "SALE_NOT_PENDING", body = SimpleError),
        (status = NOT_FOUND, body = SimpleError),
    ),
)]
pub async fn cancel_sale(
    State(state): State<AppState>,
    Path(chassis_number): Path<String>,
) -> Result<StatusCode, (StatusCode, SimpleError)> {
    let conn = &mut state.get_db_conn().await?;

    service::cancel_sale(conn, &chassis_number)
        .await
        .map_err(<(StatusCode, SimpleError)>::from)?;

    Ok(StatusCode::OK)
}

/// Gets the sale of a vehicle with its settlement breakdown
#[utoipa::path(
    get,
    path = "/sale/{chassis_number}",
    tag = "sale",
    security(("session_id" = [])),
    params(("chassis_number" = String, Path)),
    responses(
        (status = OK, body = SaleDetailsDto),
        (status = NOT_FOUND, body = SimpleError),
    ),
)]
pub async fn get_sale(
    State(state): State<AppState>,
    Path(chassis_number): Path<String>,
) -> Result<Json<SaleDetailsDto>, (StatusCode, SimpleError)> {
    Ok(Json(load_details(&state, &chassis_number).await?))
}

/// Renders the printable transaction summary of a sale
#[utoipa::path(
    get,
    path = "/sale/{chassis_number}/summary",
    tag = "sale",
    security(("session_id" = [])),
    params(("chassis_number" = String, Path)),
    responses(
        (status = OK, description = "the transaction summary as a PDF file"),
        (status = NOT_FOUND, body = SimpleError),
    ),
)]
pub async fn generate_summary(
    State(state): State<AppState>,
    Path(chassis_number): Path<String>,
) -> Result<Response, (StatusCode, SimpleError)> {
    let details = load_details(&state, &chassis_number).await?;

    let conn = &mut state.get_db_conn().await?;
    let vehicle_row = vehicle::repository::find_by_chassis(conn, &chassis_number).await?;

    let document = summary::render(&vehicle_row, &details)
        .or(Err(internal_error_msg("failed to render transaction summary")))?;

    Ok(pdf::pdf_response(
        &format!("transaction-summary-{}.pdf", chassis_number),
        document,
    ))
}
