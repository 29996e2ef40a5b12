//! Cost and pricing calculations for imported vehicles.
//!
//! Every screen that shows money (add vehicle, edit costs, mark sold,
//! invoices, reports) goes through the functions in this module so the
//! books stay consistent. All amounts are plain `f64` rounded to two
//! decimal places, matching how the figures are entered and printed.

pub mod words;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

/// rounds a money amount to 2 decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// treats absent or non finite cost inputs as zero
fn cost_or_zero(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// the five vehicle cost fields paid in japan, in JPY
#[derive(Clone, Copy, Debug, Default)]
pub struct JapanCosts {
    pub bid_price: Option<f64>,
    pub commission: Option<f64>,
    pub insurance: Option<f64>,
    pub inland_transport: Option<f64>,
    pub other: Option<f64>,
}

/// CIF total of a vehicle in JPY, absent fields count as zero
pub fn cif_total(costs: &JapanCosts) -> f64 {
    round2(
        cost_or_zero(costs.bid_price)
            + cost_or_zero(costs.commission)
            + cost_or_zero(costs.insurance)
            + cost_or_zero(costs.inland_transport)
            + cost_or_zero(costs.other),
    )
}

/// suggested undial amount for a CIF total and an invoice amount, floored at zero
///
/// this only fills the undial field when the user has not entered one, a manual
/// undial value always wins and the `invoice + undial == cif` sum is deliberately
/// never re-enforced afterwards (intentional flexibility in the books, kept as is)
pub fn suggest_undial(cif_total: f64, invoice_amount: f64) -> f64 {
    round2((cif_total - invoice_amount).max(0.0))
}

/// converts a JPY amount to LKR at the given rate (LKR per JPY)
pub fn jpy_to_lkr(amount_jpy: f64, rate: f64) -> f64 {
    round2(amount_jpy * rate)
}

/// the CIF split into the invoiced and undial legs, each leg converted
/// at its own negotiated rate
#[derive(Clone, Copy, Debug, Default)]
pub struct CifSplit {
    pub invoice_amount_jpy: f64,
    pub invoice_rate: f64,
    pub undial_amount_jpy: f64,
    pub undial_rate: f64,
}

/// japan total of a vehicle in LKR, the sum of both converted CIF legs
pub fn japan_total_lkr(split: &CifSplit) -> f64 {
    round2(
        jpy_to_lkr(split.invoice_amount_jpy, split.invoice_rate)
            + jpy_to_lkr(split.undial_amount_jpy, split.undial_rate),
    )
}

/// the six destination cost fields in LKR, in declaration order
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalCosts {
    pub tax: Option<f64>,
    pub clearance: Option<f64>,
    pub transport: Option<f64>,
    pub extra_1: Option<f64>,
    pub extra_2: Option<f64>,
    pub extra_3: Option<f64>,
}

impl LocalCosts {
    fn in_order(&self) -> [f64; 6] {
        [
            cost_or_zero(self.tax),
            cost_or_zero(self.clearance),
            cost_or_zero(self.transport),
            cost_or_zero(self.extra_1),
            cost_or_zero(self.extra_2),
            cost_or_zero(self.extra_3),
        ]
    }

    pub fn total(&self) -> f64 {
        round2(self.in_order().iter().sum())
    }
}

/// running "total so far" after each local cost line is added to the base,
/// in declaration order (tax, clearance, transport, extra 1 to 3)
pub fn running_totals(japan_total_lkr: f64, local: &LocalCosts) -> [f64; 6] {
    let mut acc = japan_total_lkr;
    local.in_order().map(|line| {
        acc = round2(acc + line);
        acc
    })
}

/// final total of a vehicle in LKR: japan total plus all local costs
pub fn final_total_lkr(japan_total_lkr: f64, local: &LocalCosts) -> f64 {
    round2(japan_total_lkr + local.total())
}

/// sum of the append only advance payment ledger
pub fn total_advance(payments: &[f64]) -> f64 {
    round2(payments.iter().copied().filter(|p| p.is_finite()).sum())
}

/// balance a customer still owes on the agreed selling price
pub fn remaining_balance(selling_price: f64, payments: &[f64]) -> f64 {
    round2(selling_price - total_advance(payments))
}

/// balance printed on the invoice, the invoice price may differ from the
/// originally agreed selling price
pub fn balance_to_pay(invoice_price: f64, total_advance: f64) -> f64 {
    round2(invoice_price - total_advance)
}

/// cash and cheque amount expected at full settlement
///
/// the lease financed amount is subtracted only when leasing was used, other
/// charges (registration, valuation, licence) are tracked additively and are
/// never part of the settlement
pub fn balance_settlement(balance_after_advance: f64, lease_amount: Option<f64>) -> f64 {
    round2(balance_after_advance - cost_or_zero(lease_amount))
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Jpy,
    Lkr,
}

/// normalizes a sold price to LKR using the conversion rate recorded at sale time
pub fn sold_price_in_lkr(sold_price: f64, currency: Currency, rate: f64) -> f64 {
    match currency {
        Currency::Jpy => jpy_to_lkr(sold_price, rate),
        Currency::Lkr => round2(sold_price),
    }
}

/// profit of a sale in LKR, computed once at the moment of sale and persisted
///
/// uses the final total when local costs were entered, otherwise falls back to
/// the japan total, the stored value is a point in time snapshot and is never
/// recalculated when the vehicle cost fields change later
pub fn profit_lkr(
    sold_price_lkr: f64,
    final_total_lkr: Option<f64>,
    japan_total_lkr: Option<f64>,
) -> f64 {
    let cost_basis = final_total_lkr
        .or(japan_total_lkr)
        .filter(|v| v.is_finite())
        .unwrap_or(0.0);

    round2(sold_price_lkr - cost_basis)
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    NotAvailable,
    Available,
    Sold,
}

impl VehicleStatus {
    /// whether a vehicle may move from `self` to `to`
    ///
    /// the lifecycle is `not_available -> available -> sold`, a vehicle in stock
    /// can be pulled back to not available, and cancelling a provisional sale
    /// restores `available` as a compensating action, otherwise sold is terminal
    pub fn can_become(self, to: VehicleStatus) -> bool {
        use VehicleStatus::*;

        match (self, to) {
            (NotAvailable, Available) => true,
            (Available, NotAvailable) => true,
            (Available, Sold) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cif_total_sums_all_five_fields() {
        let costs = JapanCosts {
            bid_price: Some(500_000.0),
            commission: Some(50_000.0),
            insurance: Some(20_000.0),
            inland_transport: Some(30_000.0),
            other: Some(0.0),
        };

        assert_eq!(cif_total(&costs), 600_000.0);
    }

    #[test]
    fn cif_total_treats_absent_fields_as_zero() {
        let costs = JapanCosts {
            bid_price: Some(750_000.0),
            commission: None,
            insurance: None,
            inland_transport: Some(12_500.5),
            other: None,
        };

        assert_eq!(cif_total(&costs), 762_500.5);
        assert_eq!(cif_total(&JapanCosts::default()), 0.0);
    }

    #[test]
    fn cif_total_ignores_non_finite_garbage() {
        let costs = JapanCosts {
            bid_price: Some(f64::NAN),
            commission: Some(f64::INFINITY),
            insurance: Some(100.0),
            ..Default::default()
        };

        assert_eq!(cif_total(&costs), 100.0);
    }

    #[test]
    fn undial_suggestion_is_the_cif_remainder() {
        assert_eq!(suggest_undial(600_000.0, 400_000.0), 200_000.0);
        assert_eq!(suggest_undial(600_000.0, 0.0), 600_000.0);
    }

    #[test]
    fn undial_suggestion_floors_at_zero_when_invoice_exceeds_cif() {
        assert_eq!(suggest_undial(600_000.0, 600_000.0), 0.0);
        assert_eq!(suggest_undial(600_000.0, 700_000.0), 0.0);
    }

    #[test]
    fn japan_total_converts_both_legs_at_their_own_rate() {
        let split = CifSplit {
            invoice_amount_jpy: 400_000.0,
            invoice_rate: 1.98,
            undial_amount_jpy: 200_000.0,
            undial_rate: 2.0,
        };

        // 400_000 * 1.98 = 792_000, 200_000 * 2.00 = 400_000
        assert!((japan_total_lkr(&split) - 1_192_000.0).abs() < 0.01);
    }

    #[test]
    fn running_totals_accumulate_in_declaration_order() {
        let local = LocalCosts {
            tax: Some(100.0),
            clearance: Some(50.0),
            transport: None,
            extra_1: Some(25.0),
            extra_2: None,
            extra_3: Some(10.0),
        };

        assert_eq!(
            running_totals(1_000.0, &local),
            [1_100.0, 1_150.0, 1_150.0, 1_175.0, 1_175.0, 1_185.0]
        );
        assert_eq!(final_total_lkr(1_000.0, &local), 1_185.0);
    }

    #[test]
    fn remaining_balance_decreases_as_payments_accrue() {
        let selling_price = 3_500_000.0;
        let mut payments: Vec<f64> = vec![];
        let mut previous = remaining_balance(selling_price, &payments);

        for amount in [500_000.0, 300_000.0] {
            payments.push(amount);
            let current = remaining_balance(selling_price, &payments);
            assert!(current <= previous);
            previous = current;
        }

        assert_eq!(total_advance(&payments), 800_000.0);
        assert_eq!(previous, 2_700_000.0);
    }

    #[test]
    fn settlement_subtracts_lease_but_never_other_charges() {
        assert_eq!(balance_settlement(2_700_000.0, Some(1_500_000.0)), 1_200_000.0);
        assert_eq!(balance_settlement(2_700_000.0, None), 2_700_000.0);
    }

    #[test]
    fn sold_price_is_normalized_with_the_recorded_rate() {
        assert_eq!(sold_price_in_lkr(1_000_000.0, Currency::Jpy, 1.98), 1_980_000.0);
        assert_eq!(sold_price_in_lkr(3_500_000.0, Currency::Lkr, 1.98), 3_500_000.0);
    }

    #[test]
    fn profit_prefers_final_total_and_falls_back_to_japan_total() {
        assert_eq!(profit_lkr(3_500_000.0, Some(3_000_000.0), Some(2_500_000.0)), 500_000.0);
        assert_eq!(profit_lkr(3_500_000.0, None, Some(2_500_000.0)), 1_000_000.0);
        assert_eq!(profit_lkr(3_500_000.0, None, None), 3_500_000.0);
    }

    #[test]
    fn status_machine_only_allows_the_documented_transitions() {
        use VehicleStatus::*;

        assert!(NotAvailable.can_become(Available));
        assert!(Available.can_become(NotAvailable));
        assert!(Available.can_become(Sold));

        assert!(!NotAvailable.can_become(Sold));
        assert!(!Sold.can_become(Available));
        assert!(!Sold.can_become(NotAvailable));
        assert!(!Available.can_become(Available));
    }

    #[test]
    fn currency_and_status_round_trip_their_string_forms() {
        use std::str::FromStr;

        assert_eq!(Currency::Jpy.to_string(), "JPY");
        assert_eq!(Currency::from_str("LKR").unwrap(), Currency::Lkr);
        assert_eq!(VehicleStatus::NotAvailable.to_string(), "not_available");
        assert_eq!(
            VehicleStatus::from_str("available").unwrap(),
            VehicleStatus::Available
        );
    }
}
