use crate::database::models;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentDto {
    #[validate(range(min = 0.01))]
    pub amount_lkr: f64,

    pub paid_on: NaiveDate,

    #[validate(length(max = 255))]
    pub bank: Option<String>,

    #[validate(length(max = 255))]
    pub branch: Option<String>,

    #[validate(length(max = 255))]
    pub reference: Option<String>,
}

/// The first advance of a vehicle, captures the customer snapshot and the
/// agreed selling price together with the opening payment
#[derive(Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdvanceDto {
    #[validate(length(min = 1, max = 255))]
    pub customer_name: String,

    #[validate(length(max = 64))]
    pub customer_phone: Option<String>,

    #[validate(length(max = 512))]
    pub customer_address: Option<String>,

    #[validate(length(max = 64))]
    pub customer_nic: Option<String>,

    #[validate(range(min = 0.01))]
    pub selling_price_lkr: f64,

    #[validate]
    pub first_payment: CreatePaymentDto,
}

/// A vehicle advance with its payment ledger and the derived balances,
/// `advance` is null while no advance was taken yet
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdvanceSummaryDto {
    pub advance: Option<models::Advance>,
    pub payments: Vec<models::AdvancePayment>,
    pub total_advance_lkr: f64,
    pub remaining_balance_lkr: Option<f64>,
}
