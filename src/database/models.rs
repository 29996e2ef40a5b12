use chrono::offset::Utc;
use chrono::{DateTime, NaiveDate};
use diesel::{Identifiable, Insertable, Queryable, Selectable};
use ipnetwork::IpNetwork;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Queryable, Debug, Identifiable, Selectable, Clone)]
#[diesel(table_name = crate::database::schema::user)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub email: String,
    pub password: String,
    pub role: String,
}

#[derive(Queryable, Debug, Identifiable, Selectable, Clone)]
#[diesel(table_name = crate::database::schema::session)]
pub struct Session {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub session_token: Vec<u8>,
    pub user_id: i32,
    pub ip: IpNetwork,
    pub user_agent: String,
}

#[derive(Queryable, Debug, Identifiable, Selectable, Clone, Serialize, ToSchema)]
#[diesel(table_name = crate::database::schema::vehicle)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
#[schema(title = "Vehicle")]
pub struct Vehicle {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub chassis_number: String,
    pub maker: String,
    pub model: String,
    pub manufacture_year: Option<i16>,
    pub mileage_km: Option<i32>,
    pub status: String,
    pub bid_price_jpy: Option<f64>,
    pub commission_jpy: Option<f64>,
    pub insurance_jpy: Option<f64>,
    pub inland_transport_jpy: Option<f64>,
    pub other_cost_label: Option<String>,
    pub other_cost_jpy: Option<f64>,
    pub invoice_amount_jpy: Option<f64>,
    pub invoice_rate: Option<f64>,
    pub undial_amount_jpy: Option<f64>,
    pub undial_rate: Option<f64>,
    pub tax_lkr: Option<f64>,
    pub clearance_lkr: Option<f64>,
    pub transport_lkr: Option<f64>,
    pub extra_1_label: Option<String>,
    pub extra_1_lkr: Option<f64>,
    pub extra_2_label: Option<String>,
    pub extra_2_lkr: Option<f64>,
    pub extra_3_label: Option<String>,
    pub extra_3_lkr: Option<f64>,
    pub japan_total_lkr: Option<f64>,
    pub final_total_lkr: Option<f64>,
    pub buy_price: Option<f64>,
    pub buy_currency: Option<String>,
    pub engine_number: Option<String>,
    pub engine_capacity: Option<String>,
    pub colour: Option<String>,
    pub fuel_type: Option<String>,
    pub seating_capacity: Option<i16>,
}

impl Vehicle {
    /// descriptive fields are only filled when a invoice is generated, so their
    /// presence doubles as the "invoice generated" flag on listing screens
    pub fn invoice_generated(&self) -> bool {
        self.engine_number.is_some()
    }
}

/// insertable counterpart of [`Vehicle`], the cached totals are computed by
/// the pricing module before the row is written
#[derive(Insertable, Debug)]
#[diesel(table_name = crate::database::schema::vehicle)]
pub struct NewVehicle {
    pub chassis_number: String,
    pub maker: String,
    pub model: String,
    pub manufacture_year: Option<i16>,
    pub mileage_km: Option<i32>,
    pub status: String,
    pub bid_price_jpy: Option<f64>,
    pub commission_jpy: Option<f64>,
    pub insurance_jpy: Option<f64>,
    pub inland_transport_jpy: Option<f64>,
    pub other_cost_label: Option<String>,
    pub other_cost_jpy: Option<f64>,
    pub invoice_amount_jpy: Option<f64>,
    pub invoice_rate: Option<f64>,
    pub undial_amount_jpy: Option<f64>,
    pub undial_rate: Option<f64>,
    pub tax_lkr: Option<f64>,
    pub clearance_lkr: Option<f64>,
    pub transport_lkr: Option<f64>,
    pub extra_1_label: Option<String>,
    pub extra_1_lkr: Option<f64>,
    pub extra_2_label: Option<String>,
    pub extra_2_lkr: Option<f64>,
    pub extra_3_label: Option<String>,
    pub extra_3_lkr: Option<f64>,
    pub japan_total_lkr: Option<f64>,
    pub final_total_lkr: Option<f64>,
    pub buy_price: Option<f64>,
    pub buy_currency: Option<String>,
}

#[derive(Queryable, Debug, Identifiable, Selectable, Clone, Serialize, ToSchema)]
#[diesel(table_name = crate::database::schema::advance)]
#[serde(rename_all = "camelCase")]
#[schema(title = "Advance")]
pub struct Advance {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub chassis_number: String,
    pub customer_name: String,
    pub customer_phone: Option<String>,
    pub customer_address: Option<String>,
    pub customer_nic: Option<String>,
    pub selling_price_lkr: f64,
}

#[derive(Queryable, Debug, Identifiable, Selectable, Clone, Serialize, ToSchema)]
#[diesel(table_name = crate::database::schema::advance_payment)]
#[serde(rename_all = "camelCase")]
#[schema(title = "AdvancePayment")]
pub struct AdvancePayment {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub chassis_number: String,
    pub amount_lkr: f64,
    pub paid_on: NaiveDate,
    pub bank: Option<String>,
    pub branch: Option<String>,
    pub reference: Option<String>,
}

#[derive(Queryable, Debug, Identifiable, Selectable, Clone, Serialize, ToSchema)]
#[diesel(table_name = crate::database::schema::sale)]
#[serde(rename_all = "camelCase")]
#[schema(title = "Sale")]
pub struct Sale {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub chassis_number: String,
    pub status: String,
    pub sold_price: f64,
    pub sold_currency: String,
    pub conversion_rate: f64,
    pub sold_price_lkr: f64,
    pub profit_lkr: f64,
    pub sold_on: NaiveDate,
    pub customer_name: String,
    pub customer_phone: Option<String>,
    pub customer_address: Option<String>,
    pub customer_nic: Option<String>,
}

#[derive(Queryable, Debug, Identifiable, Selectable, Clone, Serialize, ToSchema)]
#[diesel(table_name = crate::database::schema::transaction_detail)]
#[serde(rename_all = "camelCase")]
#[schema(title = "TransactionDetail")]
pub struct TransactionDetail {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub chassis_number: String,
    pub leasing_company: Option<String>,
    pub lease_amount_lkr: Option<f64>,
    pub cheque_number: Option<String>,
    pub cheque_amount_lkr: Option<f64>,
    pub cash_amount_lkr: Option<f64>,
    pub registration_fee_lkr: Option<f64>,
    pub valuation_fee_lkr: Option<f64>,
    pub licence_fee_lkr: Option<f64>,
}

#[derive(Queryable, Debug, Identifiable, Selectable, Clone, Serialize, ToSchema)]
#[diesel(table_name = crate::database::schema::lease_collection)]
#[serde(rename_all = "camelCase")]
#[schema(title = "LeaseCollection")]
pub struct LeaseCollection {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub chassis_number: String,
    pub company: String,
    pub amount_due_lkr: f64,
    pub collected: bool,
    pub cheque_amount_lkr: Option<f64>,
    pub personal_loan_amount_lkr: Option<f64>,
    pub collected_on: Option<NaiveDate>,
}
