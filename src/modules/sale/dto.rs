use crate::database::models;
use crate::pricing::Currency;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use validator::Validate;

/// Saga status of a sale row.
///
/// Marking a vehicle as sold writes the sale, the optional transaction detail
/// and lease collection, then flips the vehicle, all as `pending`. The user
/// either confirms the sale or cancels it, cancelling compensates every write
/// and restores the vehicle to `available`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SaleStatus {
    Pending,
    Confirmed,
}

/// Settlement breakdown recorded at sale time, regenerated later as the
/// transaction summary document
#[derive(Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDetailDto {
    #[validate(length(max = 255))]
    pub leasing_company: Option<String>,

    #[validate(range(min = 0.0))]
    pub lease_amount_lkr: Option<f64>,

    #[validate(length(max = 64))]
    pub cheque_number: Option<String>,

    #[validate(range(min = 0.0))]
    pub cheque_amount_lkr: Option<f64>,

    #[validate(range(min = 0.0))]
    pub cash_amount_lkr: Option<f64>,

    #[validate(range(min = 0.0))]
    pub registration_fee_lkr: Option<f64>,

    #[validate(range(min = 0.0))]
    pub valuation_fee_lkr: Option<f64>,

    #[validate(range(min = 0.0))]
    pub licence_fee_lkr: Option<f64>,
}

#[derive(Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OpenSaleDto {
    #[validate(range(min = 0.01))]
    pub sold_price: f64,

    pub sold_currency: Currency,

    /// LKR per JPY rate used to normalize the sold price, required for JPY
    /// sales, ignored for LKR ones
    #[validate(range(min = 0.0001))]
    pub conversion_rate: Option<f64>,

    pub sold_on: NaiveDate,

    #[validate(length(min = 1, max = 255))]
    pub customer_name: String,

    #[validate(length(max = 64))]
    pub customer_phone: Option<String>,

    #[validate(length(max = 512))]
    pub customer_address: Option<String>,

    #[validate(length(max = 64))]
    pub customer_nic: Option<String>,

    #[validate]
    pub transaction_detail: Option<TransactionDetailDto>,
}

/// Derived settlement figures of a sale
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SettlementDto {
    pub total_advance_lkr: f64,
    pub balance_after_advance_lkr: f64,
    /// present only when the sale was lease financed
    pub lease_amount_lkr: Option<f64>,
    /// the cash and cheque amount expected at full settlement
    pub balance_settlement_lkr: f64,
    /// registration, valuation and licence charges, tracked additively,
    /// never subtracted from the settlement
    pub other_charges_lkr: f64,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaleDetailsDto {
    pub sale: models::Sale,
    pub transaction_detail: Option<models::TransactionDetail>,
    pub settlement: SettlementDto,
}
