use super::dto::{
    AdvanceReportRow, AdvancesReportDto, ReportFormat, ReportQuery, SalesReportDto,
    SalesReportQuery, SalesReportRow, StockReportDto, StockReportRow,
};
use super::repository;
use crate::modules::common::responses::{internal_error_msg, SimpleError};
use crate::modules::{auth, sale};
use crate::pricing;
use crate::server::controller::AppState;
use crate::services::pdf::{self, report};
use axum::response::{IntoResponse, Response};
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use http::StatusCode;

pub fn create_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/stock", get(stock_report))
        .route("/sales", get(sales_report))
        .route("/advances", get(advances_report))
        .layer(axum::middleware::from_fn_with_state(
            state,
            auth::middleware::require_user,
        ))
}

/// Stock summary of unsold vehicles and their cost totals
#[utoipa::path(
    get,
    path = "/report/stock",
    tag = "report",
    security(("session_id" = [])),
    params(ReportQuery),
    responses((status = OK, body = StockReportDto)),
)]
pub async fn stock_report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Result<Response, (StatusCode, SimpleError)> {
    let conn = &mut state.get_db_conn().await?;

    let vehicles = repository::list_unsold_vehicles(conn).await?;

    let rows: Vec<StockReportRow> = vehicles
        .into_iter()
        .map(|v| StockReportRow {
            chassis_number: v.chassis_number,
            maker: v.maker,
            model: v.model,
            status: v.status,
            japan_total_lkr: v.japan_total_lkr,
            final_total_lkr: v.final_total_lkr,
        })
        .collect();

    let total_cost_lkr =
        pricing::round2(rows.iter().filter_map(|r| r.final_total_lkr).sum());

    let dto = StockReportDto {
        vehicle_count: rows.len() as i64,
        rows,
        total_cost_lkr,
    };

    if query.format == Some(ReportFormat::Pdf) {
        let document = report::render_stock(&dto)
            .or(Err(internal_error_msg("failed to render stock report")))?;

        return Ok(pdf::pdf_response("stock-report.pdf", document));
    }

    Ok(Json(dto).into_response())
}

/// Sales and profit summary for a date range
#[utoipa::path(
    get,
    path = "/report/sales",
    tag = "report",
    security(("session_id" = [])),
    params(SalesReportQuery),
    responses((status = OK, body = SalesReportDto)),
)]
pub async fn sales_report(
    State(state): State<AppState>,
    Query(query): Query<SalesReportQuery>,
) -> Result<Response, (StatusCode, SimpleError)> {
    let from = query
        .from
        .unwrap_or(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
    let to = query.to.unwrap_or(Utc::now().date_naive());

    let conn = &mut state.get_db_conn().await?;

    let sales = sale::repository::list_confirmed_in_range(conn, from, to).await?;

    let rows: Vec<SalesReportRow> = sales
        .into_iter()
        .map(|(sale_row, vehicle_row)| SalesReportRow {
            chassis_number: sale_row.chassis_number,
            maker: vehicle_row.maker,
            model: vehicle_row.model,
            sold_on: sale_row.sold_on,
            customer_name: sale_row.customer_name,
            sold_price_lkr: sale_row.sold_price_lkr,
            profit_lkr: sale_row.profit_lkr,
        })
        .collect();

    let dto = SalesReportDto {
        from,
        to,
        sale_count: rows.len() as i64,
        total_sales_lkr: pricing::round2(rows.iter().map(|r| r.sold_price_lkr).sum()),
        total_profit_lkr: pricing::round2(rows.iter().map(|r| r.profit_lkr).sum()),
        rows,
    };

    if query.format == Some(ReportFormat::Pdf) {
        let document = report::render_sales(&dto)
            .or(Err(internal_error_msg("failed to render sales report")))?;

        return Ok(pdf::pdf_response("sales-report.pdf", document));
    }

    Ok(Json(dto).into_response())
}

/// Outstanding advances and their remaining balances
#[utoipa::path(
    get,
    path = "/report/advances",
    tag = "report",
    security(("session_id" = [])),
    params(ReportQuery),
    responses((status = OK, body = AdvancesReportDto)),
)]
pub async fn advances_report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Result<Response, (StatusCode, SimpleError)> {
    let conn = &mut state.get_db_conn().await?;

    let advances = repository::list_advances(conn).await?;
    let payment_totals = repository::payment_totals_by_chassis(conn).await?;

    let rows: Vec<AdvanceReportRow> = advances
        .into_iter()
        .map(|a| {
            let total_advance_lkr = pricing::round2(
                payment_totals.get(&a.chassis_number).copied().unwrap_or(0.0),
            );

            AdvanceReportRow {
                remaining_balance_lkr: pricing::round2(a.selling_price_lkr - total_advance_lkr),
                chassis_number: a.chassis_number,
                customer_name: a.customer_name,
                selling_price_lkr: a.selling_price_lkr,
                total_advance_lkr,
            }
        })
        .collect();

    let dto = AdvancesReportDto {
        total_outstanding_lkr: pricing::round2(
            rows.iter().map(|r| r.remaining_balance_lkr).sum(),
        ),
        rows,
    };

    if query.format == Some(ReportFormat::Pdf) {
        let document = report::render_advances(&dto)
            .or(Err(internal_error_msg("failed to render advances report")))?;

        return Ok(pdf::pdf_response("advances-report.pdf", document));
    }

    Ok(Json(dto).into_response())
}
