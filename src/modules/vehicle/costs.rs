//! Glue between the cost fields as submitted by the dashboard forms and the
//! pricing module, used by both the add vehicle and edit costs flows.

use crate::database::models;
use crate::pricing::{self, CifSplit, JapanCosts, LocalCosts};

/// cost figures derived from a submitted cost sheet, written to the
/// cached total columns of the vehicle row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedCosts {
    pub undial_amount_jpy: Option<f64>,
    pub japan_total_lkr: Option<f64>,
    pub final_total_lkr: Option<f64>,
}

/// Derives the cached totals for a cost sheet.
///
/// When the sheet has no undial amount it is auto filled with the CIF
/// remainder of the invoice amount. A manually entered undial always wins,
/// even when the pair no longer sums to the CIF total, the books keep
/// whatever was typed.
pub fn resolve(
    japan: &JapanCosts,
    invoice_amount_jpy: Option<f64>,
    invoice_rate: Option<f64>,
    undial_amount_jpy: Option<f64>,
    undial_rate: Option<f64>,
    local: &LocalCosts,
) -> ResolvedCosts {
    let cif = pricing::cif_total(japan);

    let undial = undial_amount_jpy.or(match invoice_amount_jpy {
        Some(invoice) if cif > 0.0 => Some(pricing::suggest_undial(cif, invoice)),
        _ => None,
    });

    let japan_total = (invoice_amount_jpy.is_some() || undial.is_some()).then(|| {
        pricing::japan_total_lkr(&CifSplit {
            invoice_amount_jpy: invoice_amount_jpy.unwrap_or(0.0),
            invoice_rate: invoice_rate.unwrap_or(0.0),
            undial_amount_jpy: undial.unwrap_or(0.0),
            undial_rate: undial_rate.unwrap_or(0.0),
        })
    });

    let final_total = japan_total.map(|total| pricing::final_total_lkr(total, local));

    ResolvedCosts {
        undial_amount_jpy: undial,
        japan_total_lkr: japan_total,
        final_total_lkr: final_total,
    }
}

pub fn japan_costs_of(vehicle: &models::Vehicle) -> JapanCosts {
    JapanCosts {
        bid_price: vehicle.bid_price_jpy,
        commission: vehicle.commission_jpy,
        insurance: vehicle.insurance_jpy,
        inland_transport: vehicle.inland_transport_jpy,
        other: vehicle.other_cost_jpy,
    }
}

pub fn local_costs_of(vehicle: &models::Vehicle) -> LocalCosts {
    LocalCosts {
        tax: vehicle.tax_lkr,
        clearance: vehicle.clearance_lkr,
        transport: vehicle.transport_lkr,
        extra_1: vehicle.extra_1_lkr,
        extra_2: vehicle.extra_2_lkr,
        extra_3: vehicle.extra_3_lkr,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn japan_600k() -> JapanCosts {
        JapanCosts {
            bid_price: Some(500_000.0),
            commission: Some(50_000.0),
            insurance: Some(20_000.0),
            inland_transport: Some(30_000.0),
            other: None,
        }
    }

    #[test]
    fn fills_the_undial_remainder_when_absent() {
        let resolved = resolve(
            &japan_600k(),
            Some(400_000.0),
            Some(1.98),
            None,
            Some(2.0),
            &LocalCosts::default(),
        );

        assert_eq!(resolved.undial_amount_jpy, Some(200_000.0));
        // 400_000 * 1.98 + 200_000 * 2.00
        assert_eq!(resolved.japan_total_lkr, Some(1_192_000.0));
        assert_eq!(resolved.final_total_lkr, Some(1_192_000.0));
    }

    #[test]
    fn a_manual_undial_amount_is_kept_even_when_inconsistent() {
        let resolved = resolve(
            &japan_600k(),
            Some(400_000.0),
            Some(1.98),
            // does not sum to the CIF total with the invoice leg, kept anyway
            Some(50_000.0),
            Some(2.0),
            &LocalCosts::default(),
        );

        assert_eq!(resolved.undial_amount_jpy, Some(50_000.0));
        assert_eq!(resolved.japan_total_lkr, Some(892_000.0));
    }

    #[test]
    fn no_split_means_no_cached_totals() {
        let resolved = resolve(&japan_600k(), None, None, None, None, &LocalCosts::default());

        assert_eq!(resolved.undial_amount_jpy, None);
        assert_eq!(resolved.japan_total_lkr, None);
        assert_eq!(resolved.final_total_lkr, None);
    }

    #[test]
    fn local_costs_land_in_the_final_total_only() {
        let local = LocalCosts {
            tax: Some(250_000.0),
            clearance: Some(80_000.0),
            transport: Some(20_000.0),
            extra_1: Some(10_000.0),
            extra_2: None,
            extra_3: None,
        };

        let resolved = resolve(
            &japan_600k(),
            Some(600_000.0),
            Some(1.9775),
            None,
            None,
            &local,
        );

        assert_eq!(resolved.undial_amount_jpy, Some(0.0));
        assert_eq!(resolved.japan_total_lkr, Some(1_186_500.0));
        assert_eq!(resolved.final_total_lkr, Some(1_546_500.0));
    }
}
