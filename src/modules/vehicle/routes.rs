use super::costs;
use super::dto::{
    CostBreakdownDto, CreateVehicleDto, InvoiceQuery, ListVehiclesQuery, UpdateCostsDto,
    UpdateDetailsDto, UpdateStatusDto, VehicleDetailsDto,
};
use super::repository;
use crate::config::app_config;
use crate::database::models::Vehicle;
use crate::modules::advance;
use crate::modules::auth::{self, middleware::RequestUser};
use crate::modules::common::dto::{PaginatedVehicles, Pagination, PaginationResult};
use crate::modules::common::error_codes::INVALID_STATUS_TRANSITION;
use crate::modules::common::extractors::ValidatedJson;
use crate::modules::common::responses::{internal_error_msg, SimpleError};
use crate::pricing::{self, VehicleStatus};
use crate::server::controller::AppState;
use crate::services::pdf::{self, invoice};
use axum::response::Response;
use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, put},
    Extension, Json, Router,
};
use http::StatusCode;
use std::str::FromStr;

pub fn create_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles).post(create_vehicle))
        .route("/:chassis_number", get(get_vehicle))
        .route("/:chassis_number", delete(delete_vehicle))
        .route("/:chassis_number/costs", put(update_costs))
        .route("/:chassis_number/status", put(update_status))
        .route("/:chassis_number/details", put(update_details))
        .route("/:chassis_number/invoice", get(generate_invoice))
        .layer(axum::middleware::from_fn_with_state(
            state,
            auth::middleware::require_user,
        ))
}

/// Creates a vehicle from the add vehicle wizard payload
///
/// the undial amount is auto filled with the CIF remainder when absent and the
/// japan / final totals are computed and cached on the row
#[utoipa::path(
    post,
    path = "/vehicle",
    tag = "vehicle",
    security(("session_id" = [])),
    request_body = CreateVehicleDto,
    responses(
        (status = OK, body = Vehicle),
        (
            status = BAD_REQUEST,
            description = "invalid dto / CHASSIS_NUMBER_IN_USE / INVALID_STATUS_TRANSITION",
            body = SimpleError,
        ),
    ),
)]
pub async fn create_vehicle(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateVehicleDto>,
) -> Result<Json<Vehicle>, (StatusCode, SimpleError)> {
    let initial_status = dto.status.unwrap_or(VehicleStatus::NotAvailable);

    if initial_status == VehicleStatus::Sold {
        return Err((
            StatusCode::BAD_REQUEST,
            SimpleError::from(INVALID_STATUS_TRANSITION),
        ));
    }

    let resolved = costs::resolve(
        &dto.japan_costs(),
        dto.invoice_amount_jpy,
        dto.invoice_rate,
        dto.undial_amount_jpy,
        dto.undial_rate,
        &dto.local_costs(),
    );

    let conn = &mut state.get_db_conn().await?;

    let created_vehicle =
        repository::create_vehicle(conn, &dto, initial_status, resolved).await?;

    Ok(Json(created_vehicle))
}

/// Lists vehicles with status and search filters
#[utoipa::path(
    get,
    path = "/vehicle",
    tag = "vehicle",
    security(("session_id" = [])),
    params(ListVehiclesQuery),
    responses((status = OK, body = PaginatedVehicles)),
)]
pub async fn list_vehicles(
    State(state): State<AppState>,
    Query(query): Query<ListVehiclesQuery>,
) -> Result<Json<PaginationResult<Vehicle>>, (StatusCode, SimpleError)> {
    let pagination = Pagination {
        page: query.page.unwrap_or(1),
        page_size: query.page_size.unwrap_or(25),
    }
    .clamped();

    let conn = &mut state.get_db_conn().await?;

    let (records, item_count) = repository::list_vehicles(
        conn,
        query.status,
        query.search.as_deref(),
        pagination,
    )
    .await?;

    Ok(Json(PaginationResult::new(pagination, item_count, records)))
}

/// Gets a vehicle and its derived cost breakdown
#[utoipa::path(
    get,
    path = "/vehicle/{chassis_number}",
    tag = "vehicle",
    security(("session_id" = [])),
    params(("chassis_number" = String, Path)),
    responses(
        (status = OK, body = VehicleDetailsDto),
        (status = NOT_FOUND, body = SimpleError),
    ),
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(chassis_number): Path<String>,
) -> Result<Json<VehicleDetailsDto>, (StatusCode, SimpleError)> {
    let conn = &mut state.get_db_conn().await?;

    let vehicle = repository::find_by_chassis(conn, &chassis_number).await?;
    let breakdown = CostBreakdownDto::from(&vehicle);

    Ok(Json(VehicleDetailsDto { vehicle, breakdown }))
}

/// Replaces the cost sheet of a vehicle and recomputes the cached totals
#[utoipa::path(
    put,
    path = "/vehicle/{chassis_number}/costs",
    tag = "vehicle",
    security(("session_id" = [])),
    params(("chassis_number" = String, Path)),
    request_body = UpdateCostsDto,
    responses(
        (status = OK, body = VehicleDetailsDto),
        (status = NOT_FOUND, body = SimpleError),
    ),
)]
pub async fn update_costs(
    State(state): State<AppState>,
    Path(chassis_number): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateCostsDto>,
) -> Result<Json<VehicleDetailsDto>, (StatusCode, SimpleError)> {
    let resolved = costs::resolve(
        &dto.japan_costs(),
        dto.invoice_amount_jpy,
        dto.invoice_rate,
        dto.undial_amount_jpy,
        dto.undial_rate,
        &dto.local_costs(),
    );

    let conn = &mut state.get_db_conn().await?;

    let vehicle = repository::update_costs(conn, &chassis_number, &dto, resolved).await?;
    let breakdown = CostBreakdownDto::from(&vehicle);

    Ok(Json(VehicleDetailsDto { vehicle, breakdown }))
}

/// Moves a vehicle between the not available and available states
///
/// selling a vehicle is not done here, the mark sold flow owns the
/// transition into the sold state
#[utoipa::path(
    put,
    path = "/vehicle/{chassis_number}/status",
    tag = "vehicle",
    security(("session_id" = [])),
    params(("chassis_number" = String, Path)),
    request_body = UpdateStatusDto,
    responses(
        (status = OK, body = Vehicle),
        (status = BAD_REQUEST, description = "INVALID_STATUS_TRANSITION", body = SimpleError),
        (status = NOT_FOUND, body = SimpleError),
    ),
)]
pub async fn update_status(
    State(state): State<AppState>,
    Path(chassis_number): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateStatusDto>,
) -> Result<Json<Vehicle>, (StatusCode, SimpleError)> {
    let conn = &mut state.get_db_conn().await?;

    let vehicle = repository::find_by_chassis(conn, &chassis_number).await?;

    let current_status = VehicleStatus::from_str(&vehicle.status)
        .or(Err(internal_error_msg("vehicle row has a unknown status")))?;

    let is_listing_change = dto.status != VehicleStatus::Sold;

    if !is_listing_change || !current_status.can_become(dto.status) {
        return Err((
            StatusCode::BAD_REQUEST,
            SimpleError::from(INVALID_STATUS_TRANSITION),
        ));
    }

    let updated = repository::set_status(conn, &chassis_number, dto.status).await?;

    Ok(Json(updated))
}

/// Fills the descriptive fields captured at invoice generation time
#[utoipa::path(
    put,
    path = "/vehicle/{chassis_number}/details",
    tag = "vehicle",
    security(("session_id" = [])),
    params(("chassis_number" = String, Path)),
    request_body = UpdateDetailsDto,
    responses(
        (status = OK, body = Vehicle),
        (status = NOT_FOUND, body = SimpleError),
    ),
)]
pub async fn update_details(
    State(state): State<AppState>,
    Path(chassis_number): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateDetailsDto>,
) -> Result<Json<Vehicle>, (StatusCode, SimpleError)> {
    let conn = &mut state.get_db_conn().await?;

    let vehicle = repository::update_details(conn, &chassis_number, &dto).await?;

    Ok(Json(vehicle))
}

/// Deletes a vehicle and every record referencing it
#[utoipa::path(
    delete,
    path = "/vehicle/{chassis_number}",
    tag = "vehicle",
    security(("session_id" = [])),
    params(("chassis_number" = String, Path)),
    responses(
        (status = OK),
        (status = FORBIDDEN, description = "request user is not a admin", body = SimpleError),
        (status = NOT_FOUND, body = SimpleError),
    ),
)]
pub async fn delete_vehicle(
    State(state): State<AppState>,
    Extension(req_user): Extension<RequestUser>,
    Path(chassis_number): Path<String>,
) -> Result<StatusCode, (StatusCode, SimpleError)> {
    auth::middleware::assert_admin(&req_user.0)?;

    let conn = &mut state.get_db_conn().await?;

    let deleted_count = repository::delete_by_chassis(conn, &chassis_number).await?;

    if deleted_count == 0 {
        return Err((StatusCode::NOT_FOUND, SimpleError::from("entity not found")));
    }

    Ok(StatusCode::OK)
}

/// Renders the printable invoice of a vehicle
///
/// the balance to pay on the document is the invoice price minus the advance
/// ledger total, the invoice price may differ from the agreed selling price
#[utoipa::path(
    get,
    path = "/vehicle/{chassis_number}/invoice",
    tag = "vehicle",
    security(("session_id" = [])),
    params(("chassis_number" = String, Path), InvoiceQuery),
    responses(
        (status = OK, description = "the invoice as a PDF file"),
        (status = NOT_FOUND, body = SimpleError),
    ),
)]
pub async fn generate_invoice(
    State(state): State<AppState>,
    Path(chassis_number): Path<String>,
    Query(query): Query<InvoiceQuery>,
) -> Result<Response, (StatusCode, SimpleError)> {
    let conn = &mut state.get_db_conn().await?;

    let vehicle = repository::find_by_chassis(conn, &chassis_number).await?;

    let maybe_advance = advance::repository::find_by_chassis(conn, &chassis_number).await?;
    let payments = advance::repository::list_payments(conn, &chassis_number).await?;

    let amounts: Vec<f64> = payments.iter().map(|p| p.amount_lkr).collect();
    let total_advance = pricing::total_advance(&amounts);
    let balance_to_pay = pricing::balance_to_pay(query.price, total_advance);

    let letterhead = match query.letterhead {
        false => None,
        true => {
            let path = app_config()
                .invoice_letterhead_path
                .as_ref()
                .ok_or(internal_error_msg("no invoice letterhead configured"))?;

            let bytes = std::fs::read(path)
                .or(Err(internal_error_msg("failed to read invoice letterhead")))?;

            Some(bytes)
        }
    };

    let invoice_number = format!("{}-{:05}", app_config().invoice_prefix, vehicle.id);

    let document = invoice::render(
        &vehicle,
        &invoice_number,
        query.price,
        total_advance,
        balance_to_pay,
        maybe_advance.as_ref().map(|a| a.customer_name.as_str()),
        letterhead.as_deref(),
    )
    .or(Err(internal_error_msg("failed to render invoice")))?;

    Ok(pdf::pdf_response(
        &format!("invoice-{}.pdf", vehicle.chassis_number),
        document,
    ))
}
