use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Records the settlement of a amount due from a leasing company, itemized
/// into a cheque and a personal loan part
#[derive(Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollectLeaseDto {
    #[validate(range(min = 0.0))]
    pub cheque_amount_lkr: Option<f64>,

    #[validate(range(min = 0.0))]
    pub personal_loan_amount_lkr: Option<f64>,

    pub collected_on: NaiveDate,
}

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListLeaseCollectionsQuery {
    /// filter on the collected flag, omit for all collections
    pub collected: Option<bool>,
}
