//! The transaction summary, the settlement document of a sale.

use super::template::{DocTemplate, Field, Renderer, Slot, MARGIN_X_MM};
use crate::database::models;
use crate::modules::sale::dto::SaleDetailsDto;
use crate::utils::fmt;
use anyhow::Result;
use std::collections::HashMap;

static SUMMARY: DocTemplate = DocTemplate {
    title: "Transaction Summary",
    headings: &[("TRANSACTION SUMMARY", Slot::bold(66.0, 272.0, 16.0))],
    fields: &[
        Field {
            key: "vehicle",
            label: Some(("Vehicle:", Slot::new(18.0, 256.0, 10.0))),
            value: Slot::new(48.0, 256.0, 10.0),
        },
        Field {
            key: "chassisNumber",
            label: Some(("Chassis No:", Slot::new(18.0, 249.0, 10.0))),
            value: Slot::new(48.0, 249.0, 10.0),
        },
        Field {
            key: "customer",
            label: Some(("Customer:", Slot::new(18.0, 242.0, 10.0))),
            value: Slot::new(48.0, 242.0, 10.0),
        },
        Field {
            key: "soldOn",
            label: Some(("Sold On:", Slot::new(150.0, 256.0, 10.0))),
            value: Slot::new(168.0, 256.0, 10.0),
        },
        // settlement block
        Field {
            key: "soldPrice",
            label: Some(("Selling Price:", Slot::new(18.0, 222.0, 11.0))),
            value: Slot::bold(75.0, 222.0, 11.0),
        },
        Field {
            key: "totalAdvance",
            label: Some(("Less Total Advance:", Slot::new(18.0, 214.0, 11.0))),
            value: Slot::new(75.0, 214.0, 11.0),
        },
        Field {
            key: "balanceAfterAdvance",
            label: Some(("Balance After Advance:", Slot::new(18.0, 206.0, 11.0))),
            value: Slot::new(75.0, 206.0, 11.0),
        },
        Field {
            key: "leasingCompany",
            label: Some(("Leasing Company:", Slot::new(18.0, 195.0, 10.0))),
            value: Slot::new(75.0, 195.0, 10.0),
        },
        Field {
            key: "leaseAmount",
            label: Some(("Less Lease Amount:", Slot::new(18.0, 188.0, 10.0))),
            value: Slot::new(75.0, 188.0, 10.0),
        },
        Field {
            key: "balanceSettlement",
            label: Some(("Balance Settlement:", Slot::bold(18.0, 178.0, 12.0))),
            value: Slot::bold(75.0, 178.0, 12.0),
        },
        // cheque and cash breakdown
        Field {
            key: "chequeNumber",
            label: Some(("Cheque No:", Slot::new(18.0, 160.0, 10.0))),
            value: Slot::new(75.0, 160.0, 10.0),
        },
        Field {
            key: "chequeAmount",
            label: Some(("Cheque Amount:", Slot::new(18.0, 153.0, 10.0))),
            value: Slot::new(75.0, 153.0, 10.0),
        },
        Field {
            key: "cashAmount",
            label: Some(("Cash Amount:", Slot::new(18.0, 146.0, 10.0))),
            value: Slot::new(75.0, 146.0, 10.0),
        },
        // other charges, tracked additively, never part of the settlement
        Field {
            key: "registrationFee",
            label: Some(("Registration:", Slot::new(18.0, 128.0, 10.0))),
            value: Slot::new(75.0, 128.0, 10.0),
        },
        Field {
            key: "valuationFee",
            label: Some(("Valuation:", Slot::new(18.0, 121.0, 10.0))),
            value: Slot::new(75.0, 121.0, 10.0),
        },
        Field {
            key: "licenceFee",
            label: Some(("R-Licence:", Slot::new(18.0, 114.0, 10.0))),
            value: Slot::new(75.0, 114.0, 10.0),
        },
        Field {
            key: "otherChargesTotal",
            label: Some(("Other Charges Total:", Slot::new(18.0, 104.0, 10.0))),
            value: Slot::new(75.0, 104.0, 10.0),
        },
        Field {
            key: "sellerSignature",
            label: None,
            value: Slot::new(138.0, 35.0, 9.0),
        },
    ],
    rules: &[
        (MARGIN_X_MM, 192.0, 266.0),
        (MARGIN_X_MM, 192.0, 232.0),
        (MARGIN_X_MM, 192.0, 168.0),
        (MARGIN_X_MM, 192.0, 136.0),
        (138.0, 192.0, 40.0),
    ],
};

pub fn render(vehicle: &models::Vehicle, details: &SaleDetailsDto) -> Result<Vec<u8>> {
    let mut values: HashMap<&'static str, String> = HashMap::new();

    let sale = &details.sale;
    let settlement = &details.settlement;

    values.insert("vehicle", format!("{} {}", vehicle.maker, vehicle.model));
    values.insert("chassisNumber", vehicle.chassis_number.clone());
    values.insert("customer", sale.customer_name.clone());
    values.insert("soldOn", sale.sold_on.format("%Y-%m-%d").to_string());

    values.insert(
        "soldPrice",
        fmt::money_with_currency(sale.sold_price_lkr, "LKR"),
    );
    values.insert(
        "totalAdvance",
        fmt::money_with_currency(settlement.total_advance_lkr, "LKR"),
    );
    values.insert(
        "balanceAfterAdvance",
        fmt::money_with_currency(settlement.balance_after_advance_lkr, "LKR"),
    );
    values.insert(
        "balanceSettlement",
        fmt::money_with_currency(settlement.balance_settlement_lkr, "LKR"),
    );

    if let Some(detail) = &details.transaction_detail {
        if let Some(company) = &detail.leasing_company {
            values.insert("leasingCompany", company.clone());
        }

        if let Some(amount) = detail.lease_amount_lkr {
            values.insert("leaseAmount", fmt::money_with_currency(amount, "LKR"));
        }

        if let Some(number) = &detail.cheque_number {
            values.insert("chequeNumber", number.clone());
        }

        if let Some(amount) = detail.cheque_amount_lkr {
            values.insert("chequeAmount", fmt::money_with_currency(amount, "LKR"));
        }

        if let Some(amount) = detail.cash_amount_lkr {
            values.insert("cashAmount", fmt::money_with_currency(amount, "LKR"));
        }

        if let Some(fee) = detail.registration_fee_lkr {
            values.insert("registrationFee", fmt::money_with_currency(fee, "LKR"));
        }

        if let Some(fee) = detail.valuation_fee_lkr {
            values.insert("valuationFee", fmt::money_with_currency(fee, "LKR"));
        }

        if let Some(fee) = detail.licence_fee_lkr {
            values.insert("licenceFee", fmt::money_with_currency(fee, "LKR"));
        }

        values.insert(
            "otherChargesTotal",
            fmt::money_with_currency(settlement.other_charges_lkr, "LKR"),
        );
    }

    values.insert("sellerSignature", String::from("Authorized Signatory"));

    let renderer = Renderer::new(SUMMARY.title)?;
    renderer.render(&SUMMARY, &values);
    renderer.finish()
}
