//! The vehicle sales invoice.
//!
//! Two variants share one template: the plain vector document and the
//! letterhead variant that draws the same fields over a configured bitmap.

use super::template::{DocTemplate, Field, Renderer, Slot, MARGIN_X_MM};
use crate::database::models;
use crate::pricing::words::amount_to_words;
use crate::utils::fmt;
use anyhow::Result;
use chrono::Utc;
use std::collections::HashMap;

static INVOICE: DocTemplate = DocTemplate {
    title: "Invoice",
    headings: &[("INVOICE", Slot::bold(92.0, 272.0, 20.0))],
    fields: &[
        Field {
            key: "invoiceNo",
            label: Some(("Invoice No:", Slot::new(18.0, 256.0, 10.0))),
            value: Slot::bold(46.0, 256.0, 10.0),
        },
        Field {
            key: "date",
            label: Some(("Date:", Slot::new(150.0, 256.0, 10.0))),
            value: Slot::new(165.0, 256.0, 10.0),
        },
        Field {
            key: "customer",
            label: Some(("Customer:", Slot::new(18.0, 247.0, 10.0))),
            value: Slot::new(46.0, 247.0, 10.0),
        },
        // vehicle block, two columns
        Field {
            key: "chassisNumber",
            label: Some(("Chassis No:", Slot::new(18.0, 224.0, 10.0))),
            value: Slot::new(52.0, 224.0, 10.0),
        },
        Field {
            key: "makerModel",
            label: Some(("Vehicle:", Slot::new(18.0, 217.0, 10.0))),
            value: Slot::new(52.0, 217.0, 10.0),
        },
        Field {
            key: "manufactureYear",
            label: Some(("Year:", Slot::new(18.0, 210.0, 10.0))),
            value: Slot::new(52.0, 210.0, 10.0),
        },
        Field {
            key: "mileage",
            label: Some(("Mileage:", Slot::new(18.0, 203.0, 10.0))),
            value: Slot::new(52.0, 203.0, 10.0),
        },
        Field {
            key: "engineNumber",
            label: Some(("Engine No:", Slot::new(110.0, 224.0, 10.0))),
            value: Slot::new(145.0, 224.0, 10.0),
        },
        Field {
            key: "engineCapacity",
            label: Some(("Capacity:", Slot::new(110.0, 217.0, 10.0))),
            value: Slot::new(145.0, 217.0, 10.0),
        },
        Field {
            key: "colour",
            label: Some(("Colour:", Slot::new(110.0, 210.0, 10.0))),
            value: Slot::new(145.0, 210.0, 10.0),
        },
        Field {
            key: "fuelType",
            label: Some(("Fuel:", Slot::new(110.0, 203.0, 10.0))),
            value: Slot::new(145.0, 203.0, 10.0),
        },
        Field {
            key: "seatingCapacity",
            label: Some(("Seating:", Slot::new(110.0, 196.0, 10.0))),
            value: Slot::new(145.0, 196.0, 10.0),
        },
        // payment block
        Field {
            key: "invoicePrice",
            label: Some(("Invoice Price:", Slot::new(18.0, 172.0, 11.0))),
            value: Slot::bold(70.0, 172.0, 11.0),
        },
        Field {
            key: "totalAdvance",
            label: Some(("Less Advance Paid:", Slot::new(18.0, 164.0, 11.0))),
            value: Slot::new(70.0, 164.0, 11.0),
        },
        Field {
            key: "balanceToPay",
            label: Some(("Balance To Pay:", Slot::bold(18.0, 155.0, 11.0))),
            value: Slot::bold(70.0, 155.0, 11.0),
        },
        Field {
            key: "amountWords",
            label: Some(("Amount in words:", Slot::new(18.0, 143.0, 9.0))),
            value: Slot::new(18.0, 137.0, 9.0),
        },
        Field {
            key: "customerSignature",
            label: None,
            value: Slot::new(18.0, 35.0, 9.0),
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
        (MARGIN_X_MM, 192.0, 181.0),
        (MARGIN_X_MM, 70.0, 40.0),
        (138.0, 192.0, 40.0),
    ],
};

#[allow(clippy::too_many_arguments)]
pub fn render(
    vehicle: &models::Vehicle,
    invoice_number: &str,
    invoice_price: f64,
    total_advance: f64,
    balance_to_pay: f64,
    customer_name: Option<&str>,
    letterhead: Option<&[u8]>,
) -> Result<Vec<u8>> {
    let mut values: HashMap<&'static str, String> = HashMap::new();

    values.insert("invoiceNo", invoice_number.to_owned());
    values.insert("date", Utc::now().date_naive().format("%Y-%m-%d").to_string());

    if let Some(customer) = customer_name {
        values.insert("customer", customer.to_owned());
    }

    values.insert("chassisNumber", vehicle.chassis_number.clone());
    values.insert("makerModel", format!("{} {}", vehicle.maker, vehicle.model));

    if let Some(year) = vehicle.manufacture_year {
        values.insert("manufactureYear", year.to_string());
    }

    if let Some(mileage) = vehicle.mileage_km {
        values.insert("mileage", format!("{} km", mileage));
    }

    if let Some(engine_number) = &vehicle.engine_number {
        values.insert("engineNumber", engine_number.clone());
    }

    if let Some(capacity) = &vehicle.engine_capacity {
        values.insert("engineCapacity", capacity.clone());
    }

    if let Some(colour) = &vehicle.colour {
        values.insert("colour", colour.clone());
    }

    if let Some(fuel_type) = &vehicle.fuel_type {
        values.insert("fuelType", fuel_type.clone());
    }

    if let Some(seating) = vehicle.seating_capacity {
        values.insert("seatingCapacity", seating.to_string());
    }

    values.insert(
        "invoicePrice",
        fmt::money_with_currency(invoice_price, "LKR"),
    );
    values.insert(
        "totalAdvance",
        fmt::money_with_currency(total_advance, "LKR"),
    );
    values.insert(
        "balanceToPay",
        fmt::money_with_currency(balance_to_pay, "LKR"),
    );
    values.insert(
        "amountWords",
        format!("Rupees {} Only", amount_to_words(balance_to_pay.max(0.0))),
    );

    values.insert("customerSignature", String::from("Customer Signature"));
    values.insert("sellerSignature", String::from("Authorized Signatory"));

    let renderer = Renderer::new(INVOICE.title)?;

    if let Some(bytes) = letterhead {
        renderer.background_image(bytes)?;
    }

    renderer.render(&INVOICE, &values);
    renderer.finish()
}
