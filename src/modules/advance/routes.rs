use super::dto::{AdvanceSummaryDto, CreateAdvanceDto, CreatePaymentDto};
use super::repository;
use crate::database::models::AdvancePayment;
use crate::modules::auth;
use crate::modules::common::error_codes::ADVANCE_ALREADY_EXISTS;
use crate::modules::common::extractors::ValidatedJson;
use crate::modules::common::responses::{internal_error_msg, SimpleError};
use crate::modules::vehicle;
use crate::pricing;
use crate::server::controller::AppState;
use crate::services::pdf::{self, receipt};
use axum::response::Response;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use http::StatusCode;

pub fn create_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/:chassis_number", get(get_advance).post(create_advance))
        .route("/:chassis_number/payments", post(add_payment))
        .route("/:chassis_number/receipt", get(generate_receipt))
        .layer(axum::middleware::from_fn_with_state(
            state,
            auth::middleware::require_user,
        ))
}

async fn load_summary(
    state: &AppState,
    chassis_number: &str,
) -> Result<AdvanceSummaryDto, (StatusCode, SimpleError)> {
    let conn = &mut state.get_db_conn().await?;

    let advance = repository::find_by_chassis(conn, chassis_number).await?;
    let payments = repository::list_payments(conn, chassis_number).await?;

    let amounts: Vec<f64> = payments.iter().map(|p| p.amount_lkr).collect();
    let total_advance_lkr = pricing::total_advance(&amounts);

    let remaining_balance_lkr = advance
        .as_ref()
        .map(|a| pricing::remaining_balance(a.selling_price_lkr, &amounts));

    Ok(AdvanceSummaryDto {
        advance,
        payments,
        total_advance_lkr,
        remaining_balance_lkr,
    })
}

/// Gets the advance of a vehicle with its payment ledger and balances
///
/// a vehicle without a advance yet is a normal response with a null
/// advance, not a error
#[utoipa::path(
    get,
    path = "/advance/{chassis_number}",
    tag = "advance",
    security(("session_id" = [])),
    params(("chassis_number" = String, Path)),
    responses((status = OK, body = AdvanceSummaryDto)),
)]
pub async fn get_advance(
    State(state): State<AppState>,
    Path(chassis_number): Path<String>,
) -> Result<Json<AdvanceSummaryDto>, (StatusCode, SimpleError)> {
    Ok(Json(load_summary(&state, &chassis_number).await?))
}

/// Takes the first advance on a vehicle
///
/// records the customer snapshot, the agreed selling price and the opening
/// payment, further amounts must be appended as payments
#[utoipa::path(
    post,
    path = "/advance/{chassis_number}",
    tag = "advance",
    security(("session_id" = [])),
    params(("chassis_number" = String, Path)),
    request_body = CreateAdvanceDto,
    responses(
        (status = OK, body = AdvanceSummaryDto),
        (status = BAD_REQUEST, description = "invalid dto / ADVANCE_ALREADY_EXISTS", body = SimpleError),
        (status = NOT_FOUND, description = "vehicle not found", body = SimpleError),
    ),
)]
pub async fn create_advance(
    State(state): State<AppState>,
    Path(chassis_number): Path<String>,
    ValidatedJson(dto): ValidatedJson<CreateAdvanceDto>,
) -> Result<Json<AdvanceSummaryDto>, (StatusCode, SimpleError)> {
    let conn = &mut state.get_db_conn().await?;

    // 404 for unknown vehicles instead of a foreign key violation
    vehicle::repository::find_by_chassis(conn, &chassis_number).await?;

    let existing = repository::find_by_chassis(conn, &chassis_number).await?;

    if existing.is_some() {
        return Err((
            StatusCode::BAD_REQUEST,
            SimpleError::from(ADVANCE_ALREADY_EXISTS),
        ));
    }

    repository::create_with_first_payment(conn, &chassis_number, &dto).await?;

    Ok(Json(load_summary(&state, &chassis_number).await?))
}

/// Appends a payment to the advance ledger of a vehicle
#[utoipa::path(
    post,
    path = "/advance/{chassis_number}/payments",
    tag = "advance",
    security(("session_id" = [])),
    params(("chassis_number" = String, Path)),
    request_body = CreatePaymentDto,
    responses(
        (status = OK, body = AdvancePayment),
        (status = BAD_REQUEST, description = "vehicle has no advance yet", body = SimpleError),
    ),
)]
pub async fn add_payment(
    State(state): State<AppState>,
    Path(chassis_number): Path<String>,
    ValidatedJson(dto): ValidatedJson<CreatePaymentDto>,
) -> Result<Json<AdvancePayment>, (StatusCode, SimpleError)> {
    let conn = &mut state.get_db_conn().await?;

    let advance = repository::find_by_chassis(conn, &chassis_number).await?;

    if advance.is_none() {
        return Err((
            StatusCode::BAD_REQUEST,
            SimpleError::from("vehicle has no advance yet"),
        ));
    }

    let payment = repository::add_payment(conn, &chassis_number, &dto).await?;

    Ok(Json(payment))
}

/// Renders the printable receipt of the latest advance payment
#[utoipa::path(
    get,
    path = "/advance/{chassis_number}/receipt",
    tag = "advance",
    security(("session_id" = [])),
    params(("chassis_number" = String, Path)),
    responses(
        (status = OK, description = "the receipt as a PDF file"),
        (status = NOT_FOUND, description = "vehicle has no advance payments", body = SimpleError),
    ),
)]
pub async fn generate_receipt(
    State(state): State<AppState>,
    Path(chassis_number): Path<String>,
) -> Result<Response, (StatusCode, SimpleError)> {
    let conn = &mut state.get_db_conn().await?;

    let vehicle = vehicle::repository::find_by_chassis(conn, &chassis_number).await?;

    let advance = repository::find_by_chassis(conn, &chassis_number)
        .await?
        .ok_or((
            StatusCode::NOT_FOUND,
            SimpleError::from("vehicle has no advance yet"),
        ))?;

    let payments = repository::list_payments(conn, &chassis_number).await?;

    let latest_payment = payments.last().cloned().ok_or((
        StatusCode::NOT_FOUND,
        SimpleError::from("vehicle has no advance payments"),
    ))?;

    let amounts: Vec<f64> = payments.iter().map(|p| p.amount_lkr).collect();
    let remaining = pricing::remaining_balance(advance.selling_price_lkr, &amounts);

    let document = receipt::render(&vehicle, &advance, &latest_payment, remaining)
        .or(Err(internal_error_msg("failed to render receipt")))?;

    Ok(pdf::pdf_response(
        &format!("advance-receipt-{}.pdf", vehicle.chassis_number),
        document,
    ))
}
