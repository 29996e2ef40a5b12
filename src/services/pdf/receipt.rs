//! The advance payment receipt.

use super::template::{DocTemplate, Field, Renderer, Slot, MARGIN_X_MM};
use crate::database::models;
use crate::pricing::words::amount_to_words;
use crate::utils::fmt;
use anyhow::Result;
use std::collections::HashMap;

static RECEIPT: DocTemplate = DocTemplate {
    title: "Advance Receipt",
    headings: &[("ADVANCE PAYMENT RECEIPT", Slot::bold(62.0, 272.0, 16.0))],
    fields: &[
        Field {
            key: "receiptNo",
            label: Some(("Receipt No:", Slot::new(18.0, 256.0, 10.0))),
            value: Slot::bold(48.0, 256.0, 10.0),
        },
        Field {
            key: "date",
            label: Some(("Date:", Slot::new(150.0, 256.0, 10.0))),
            value: Slot::new(165.0, 256.0, 10.0),
        },
        Field {
            key: "receivedFrom",
            label: Some(("Received from:", Slot::new(18.0, 243.0, 10.0))),
            value: Slot::new(56.0, 243.0, 10.0),
        },
        Field {
            key: "amountWords",
            label: Some(("The sum of:", Slot::new(18.0, 233.0, 9.0))),
            value: Slot::new(18.0, 227.0, 9.0),
        },
        Field {
            key: "amount",
            label: Some(("Amount:", Slot::bold(18.0, 214.0, 12.0))),
            value: Slot::bold(48.0, 214.0, 12.0),
        },
        Field {
            key: "vehicle",
            label: Some(("Being advance for:", Slot::new(18.0, 201.0, 10.0))),
            value: Slot::new(62.0, 201.0, 10.0),
        },
        Field {
            key: "agreedPrice",
            label: Some(("Agreed Price:", Slot::new(18.0, 191.0, 10.0))),
            value: Slot::new(62.0, 191.0, 10.0),
        },
        Field {
            key: "balanceRemaining",
            label: Some(("Balance Remaining:", Slot::new(18.0, 183.0, 10.0))),
            value: Slot::new(62.0, 183.0, 10.0),
        },
        Field {
            key: "bank",
            label: Some(("Paid via:", Slot::new(18.0, 171.0, 9.0))),
            value: Slot::new(62.0, 171.0, 9.0),
        },
        Field {
            key: "sellerSignature",
            label: None,
            value: Slot::new(138.0, 35.0, 9.0),
        },
    ],
    rules: &[(MARGIN_X_MM, 192.0, 266.0), (138.0, 192.0, 40.0)],
};

pub fn render(
    vehicle: &models::Vehicle,
    advance: &models::Advance,
    payment: &models::AdvancePayment,
    remaining_balance: f64,
) -> Result<Vec<u8>> {
    let mut values: HashMap<&'static str, String> = HashMap::new();

    values.insert("receiptNo", format!("AR-{:05}", payment.id));
    values.insert("date", payment.paid_on.format("%Y-%m-%d").to_string());
    values.insert("receivedFrom", advance.customer_name.clone());
    values.insert(
        "amountWords",
        format!("Rupees {} Only", amount_to_words(payment.amount_lkr)),
    );
    values.insert(
        "amount",
        fmt::money_with_currency(payment.amount_lkr, "LKR"),
    );
    values.insert(
        "vehicle",
        format!(
            "{} {} ({})",
            vehicle.maker, vehicle.model, vehicle.chassis_number
        ),
    );
    values.insert(
        "agreedPrice",
        fmt::money_with_currency(advance.selling_price_lkr, "LKR"),
    );
    values.insert(
        "balanceRemaining",
        fmt::money_with_currency(remaining_balance, "LKR"),
    );

    if let Some(bank) = &payment.bank {
        let branch = payment.branch.as_deref().unwrap_or("");
        let reference = payment.reference.as_deref().unwrap_or("");

        values.insert(
            "bank",
            format!("{} {} {}", bank, branch, reference).trim().to_owned(),
        );
    }

    values.insert("sellerSignature", String::from("Authorized Signatory"));

    let renderer = Renderer::new(RECEIPT.title)?;
    renderer.render(&RECEIPT, &values);
    renderer.finish()
}
