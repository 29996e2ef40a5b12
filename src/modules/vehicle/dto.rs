use crate::database::models;
use crate::modules::common::validators::REGEX_IS_CHASSIS_NUMBER;
use crate::modules::vehicle::costs;
use crate::pricing::{self, Currency, VehicleStatus};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleDto {
    #[validate(length(min = 5, max = 64))]
    #[validate(regex(
        path = "REGEX_IS_CHASSIS_NUMBER",
        message = "chassis number must be uppercase alphanumeric, eg: NZE121-3123785"
    ))]
    pub chassis_number: String,

    #[validate(length(min = 1, max = 255))]
    pub maker: String,

    #[validate(length(min = 1, max = 255))]
    pub model: String,

    #[validate(range(min = 1950, max = 2100))]
    pub manufacture_year: Option<i16>,

    #[validate(range(min = 0))]
    pub mileage_km: Option<i32>,

    /// initial lifecycle status, defaults to `not_available`,
    /// a vehicle is never created as sold
    pub status: Option<VehicleStatus>,

    #[validate(range(min = 0.0))]
    pub bid_price_jpy: Option<f64>,

    #[validate(range(min = 0.0))]
    pub commission_jpy: Option<f64>,

    #[validate(range(min = 0.0))]
    pub insurance_jpy: Option<f64>,

    #[validate(range(min = 0.0))]
    pub inland_transport_jpy: Option<f64>,

    #[validate(length(max = 255))]
    pub other_cost_label: Option<String>,

    #[validate(range(min = 0.0))]
    pub other_cost_jpy: Option<f64>,

    #[validate(range(min = 0.0))]
    pub invoice_amount_jpy: Option<f64>,

    #[validate(range(min = 0.0))]
    pub invoice_rate: Option<f64>,

    /// when omitted the CIF remainder of the invoice amount is used
    #[validate(range(min = 0.0))]
    pub undial_amount_jpy: Option<f64>,

    #[validate(range(min = 0.0))]
    pub undial_rate: Option<f64>,

    #[validate(range(min = 0.0))]
    pub tax_lkr: Option<f64>,

    #[validate(range(min = 0.0))]
    pub clearance_lkr: Option<f64>,

    #[validate(range(min = 0.0))]
    pub transport_lkr: Option<f64>,

    #[validate(length(max = 255))]
    pub extra_1_label: Option<String>,

    #[validate(range(min = 0.0))]
    pub extra_1_lkr: Option<f64>,

    #[validate(length(max = 255))]
    pub extra_2_label: Option<String>,

    #[validate(range(min = 0.0))]
    pub extra_2_lkr: Option<f64>,

    #[validate(length(max = 255))]
    pub extra_3_label: Option<String>,

    #[validate(range(min = 0.0))]
    pub extra_3_lkr: Option<f64>,

    #[validate(range(min = 0.0))]
    pub buy_price: Option<f64>,

    pub buy_currency: Option<Currency>,
}

impl CreateVehicleDto {
    pub fn japan_costs(&self) -> pricing::JapanCosts {
        pricing::JapanCosts {
            bid_price: self.bid_price_jpy,
            commission: self.commission_jpy,
            insurance: self.insurance_jpy,
            inland_transport: self.inland_transport_jpy,
            other: self.other_cost_jpy,
        }
    }

    pub fn local_costs(&self) -> pricing::LocalCosts {
        pricing::LocalCosts {
            tax: self.tax_lkr,
            clearance: self.clearance_lkr,
            transport: self.transport_lkr,
            extra_1: self.extra_1_lkr,
            extra_2: self.extra_2_lkr,
            extra_3: self.extra_3_lkr,
        }
    }
}

/// The edit costs form, submitted as the full cost sheet, omitted amounts
/// clear the stored value. The cached totals are always recomputed.
#[derive(Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCostsDto {
    #[validate(range(min = 0.0))]
    pub bid_price_jpy: Option<f64>,

    #[validate(range(min = 0.0))]
    pub commission_jpy: Option<f64>,

    #[validate(range(min = 0.0))]
    pub insurance_jpy: Option<f64>,

    #[validate(range(min = 0.0))]
    pub inland_transport_jpy: Option<f64>,

    #[validate(length(max = 255))]
    pub other_cost_label: Option<String>,

    #[validate(range(min = 0.0))]
    pub other_cost_jpy: Option<f64>,

    #[validate(range(min = 0.0))]
    pub invoice_amount_jpy: Option<f64>,

    #[validate(range(min = 0.0))]
    pub invoice_rate: Option<f64>,

    /// when omitted the CIF remainder of the invoice amount is used
    #[validate(range(min = 0.0))]
    pub undial_amount_jpy: Option<f64>,

    #[validate(range(min = 0.0))]
    pub undial_rate: Option<f64>,

    #[validate(range(min = 0.0))]
    pub tax_lkr: Option<f64>,

    #[validate(range(min = 0.0))]
    pub clearance_lkr: Option<f64>,

    #[validate(range(min = 0.0))]
    pub transport_lkr: Option<f64>,

    #[validate(length(max = 255))]
    pub extra_1_label: Option<String>,

    #[validate(range(min = 0.0))]
    pub extra_1_lkr: Option<f64>,

    #[validate(length(max = 255))]
    pub extra_2_label: Option<String>,

    #[validate(range(min = 0.0))]
    pub extra_2_lkr: Option<f64>,

    #[validate(length(max = 255))]
    pub extra_3_label: Option<String>,

    #[validate(range(min = 0.0))]
    pub extra_3_lkr: Option<f64>,

    #[validate(range(min = 0.0))]
    pub buy_price: Option<f64>,

    pub buy_currency: Option<Currency>,
}

impl UpdateCostsDto {
    pub fn japan_costs(&self) -> pricing::JapanCosts {
        pricing::JapanCosts {
            bid_price: self.bid_price_jpy,
            commission: self.commission_jpy,
            insurance: self.insurance_jpy,
            inland_transport: self.inland_transport_jpy,
            other: self.other_cost_jpy,
        }
    }

    pub fn local_costs(&self) -> pricing::LocalCosts {
        pricing::LocalCosts {
            tax: self.tax_lkr,
            clearance: self.clearance_lkr,
            transport: self.transport_lkr,
            extra_1: self.extra_1_lkr,
            extra_2: self.extra_2_lkr,
            extra_3: self.extra_3_lkr,
        }
    }
}

#[derive(Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusDto {
    pub status: VehicleStatus,
}

/// Descriptive fields captured when a invoice is first generated
#[derive(Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDetailsDto {
    #[validate(length(min = 1, max = 64))]
    pub engine_number: String,

    #[validate(length(max = 32))]
    pub engine_capacity: Option<String>,

    #[validate(length(max = 64))]
    pub colour: Option<String>,

    #[validate(length(max = 32))]
    pub fuel_type: Option<String>,

    #[validate(range(min = 1, max = 99))]
    pub seating_capacity: Option<i16>,
}

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListVehiclesQuery {
    /// filter by lifecycle status
    pub status: Option<VehicleStatus>,

    /// case insensitive search over chassis number, maker and model
    pub search: Option<String>,

    pub page: Option<i64>,

    pub page_size: Option<i64>,
}

/// Derived cost figures of a vehicle, never stored, recomputed from the row
/// so every screen shows the same arithmetic
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdownDto {
    pub cif_total_jpy: f64,
    pub invoice_leg_lkr: f64,
    pub undial_leg_lkr: f64,
    pub japan_total_lkr: f64,
    /// total so far after each local cost line, in form order
    pub running_totals_lkr: Vec<f64>,
    pub local_total_lkr: f64,
    pub final_total_lkr: f64,
    pub invoice_generated: bool,
}

impl From<&models::Vehicle> for CostBreakdownDto {
    fn from(vehicle: &models::Vehicle) -> Self {
        let japan = costs::japan_costs_of(vehicle);
        let local = costs::local_costs_of(vehicle);

        let invoice_leg = pricing::jpy_to_lkr(
            vehicle.invoice_amount_jpy.unwrap_or(0.0),
            vehicle.invoice_rate.unwrap_or(0.0),
        );
        let undial_leg = pricing::jpy_to_lkr(
            vehicle.undial_amount_jpy.unwrap_or(0.0),
            vehicle.undial_rate.unwrap_or(0.0),
        );
        let japan_total = pricing::round2(invoice_leg + undial_leg);

        CostBreakdownDto {
            cif_total_jpy: pricing::cif_total(&japan),
            invoice_leg_lkr: invoice_leg,
            undial_leg_lkr: undial_leg,
            japan_total_lkr: japan_total,
            running_totals_lkr: pricing::running_totals(japan_total, &local).to_vec(),
            local_total_lkr: local.total(),
            final_total_lkr: pricing::final_total_lkr(japan_total, &local),
            invoice_generated: vehicle.invoice_generated(),
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDetailsDto {
    pub vehicle: models::Vehicle,
    pub breakdown: CostBreakdownDto,
}

/// Query parameters for the invoice document endpoint, the invoice price may
/// differ from the selling price agreed at advance time
#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceQuery {
    pub price: f64,

    /// letterhead variant, drawn over the configured bitmap
    #[serde(default)]
    pub letterhead: bool,
}
