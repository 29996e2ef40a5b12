use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    Json,
    Pdf,
}

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ReportQuery {
    /// json figures by default, pdf renders the printable summary
    pub format: Option<ReportFormat>,
}

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct SalesReportQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub format: Option<ReportFormat>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockReportRow {
    pub chassis_number: String,
    pub maker: String,
    pub model: String,
    pub status: String,
    pub japan_total_lkr: Option<f64>,
    pub final_total_lkr: Option<f64>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockReportDto {
    pub rows: Vec<StockReportRow>,
    pub vehicle_count: i64,
    /// sum of the final totals of vehicles that have one
    pub total_cost_lkr: f64,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalesReportRow {
    pub chassis_number: String,
    pub maker: String,
    pub model: String,
    pub sold_on: NaiveDate,
    pub customer_name: String,
    pub sold_price_lkr: f64,
    pub profit_lkr: f64,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalesReportDto {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub rows: Vec<SalesReportRow>,
    pub sale_count: i64,
    pub total_sales_lkr: f64,
    pub total_profit_lkr: f64,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdvanceReportRow {
    pub chassis_number: String,
    pub customer_name: String,
    pub selling_price_lkr: f64,
    pub total_advance_lkr: f64,
    pub remaining_balance_lkr: f64,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdvancesReportDto {
    pub rows: Vec<AdvanceReportRow>,
    pub total_outstanding_lkr: f64,
}
