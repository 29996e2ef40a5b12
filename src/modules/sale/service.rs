//! The mark sold flow.
//!
//! Selling a vehicle is a sequence of writes against independent tables
//! (sale, transaction detail, lease collection, vehicle status), not a
//! database transaction. The sequence is tracked through the `pending`
//! sale status: [`open_sale`] performs the writes and compensates the
//! completed ones when a later step fails, [`confirm_sale`] commits and
//! [`cancel_sale`] undoes everything, restoring the vehicle to stock.

use super::dto::{OpenSaleDto, SaleStatus, SettlementDto};
use super::repository;
use crate::database::db::DbConn;
use crate::database::error::DbError;
use crate::database::models;
use crate::modules::common::error_codes::{INVALID_STATUS_TRANSITION, SALE_NOT_PENDING};
use crate::modules::common::responses::SimpleError;
use crate::modules::{lease, vehicle};
use crate::pricing::{self, Currency, VehicleStatus};
use http::StatusCode;
use std::str::FromStr;

pub enum SaleFlowError {
    VehicleNotAvailable,
    SaleAlreadyExists,
    SaleNotFound,
    SaleNotPending,
    MissingConversionRate,
    Db(DbError),
}

impl From<DbError> for SaleFlowError {
    fn from(err: DbError) -> Self {
        SaleFlowError::Db(err)
    }
}

impl From<SaleFlowError> for (StatusCode, SimpleError) {
    fn from(err: SaleFlowError) -> Self {
        match err {
            SaleFlowError::VehicleNotAvailable => (
                StatusCode::BAD_REQUEST,
                SimpleError::from(INVALID_STATUS_TRANSITION),
            ),
            SaleFlowError::SaleAlreadyExists => (
                StatusCode::BAD_REQUEST,
                SimpleError::from("vehicle already has a sale"),
            ),
            SaleFlowError::SaleNotFound => {
                (StatusCode::NOT_FOUND, SimpleError::from("entity not found"))
            }
            SaleFlowError::SaleNotPending => (
                StatusCode::BAD_REQUEST,
                SimpleError::from(SALE_NOT_PENDING),
            ),
            SaleFlowError::MissingConversionRate => (
                StatusCode::BAD_REQUEST,
                SimpleError::from("a conversion rate is required for JPY sales"),
            ),
            SaleFlowError::Db(db_err) => db_err.into(),
        }
    }
}

/// Opens a pending sale on a available vehicle.
///
/// The profit is snapshotted here from the vehicle totals as they are right
/// now and stored on the sale row, editing the vehicle costs later never
/// changes it.
pub async fn open_sale(
    conn: &mut DbConn,
    chassis: &str,
    dto: &OpenSaleDto,
) -> Result<models::Sale, SaleFlowError> {
    let vehicle_row = vehicle::repository::find_by_chassis(conn, chassis).await?;

    let current_status =
        VehicleStatus::from_str(&vehicle_row.status).unwrap_or(VehicleStatus::NotAvailable);

    if !current_status.can_become(VehicleStatus::Sold) {
        return Err(SaleFlowError::VehicleNotAvailable);
    }

    if repository::find_by_chassis(conn, chassis).await?.is_some() {
        return Err(SaleFlowError::SaleAlreadyExists);
    }

    let rate = match dto.sold_currency {
        Currency::Jpy => dto
            .conversion_rate
            .ok_or(SaleFlowError::MissingConversionRate)?,
        Currency::Lkr => 1.0,
    };

    let sold_price_lkr = pricing::sold_price_in_lkr(dto.sold_price, dto.sold_currency, rate);

    let profit_lkr = pricing::profit_lkr(
        sold_price_lkr,
        vehicle_row.final_total_lkr,
        vehicle_row.japan_total_lkr,
    );

    let sale = repository::insert_sale(conn, chassis, dto, rate, sold_price_lkr, profit_lkr).await?;

    // every write after this point compensates the completed ones on failure
    if let Some(detail) = &dto.transaction_detail {
        if let Err(err) = repository::insert_transaction_detail(conn, chassis, detail).await {
            let _ = repository::delete_by_chassis(conn, chassis).await;
            return Err(err.into());
        }

        // a lease collection is opened when the sale is lease financed
        if let (Some(company), Some(amount)) = (&detail.leasing_company, detail.lease_amount_lkr) {
            if let Err(err) =
                lease::repository::insert_collection(conn, chassis, company, amount).await
            {
                let _ = repository::delete_detail_by_chassis(conn, chassis).await;
                let _ = repository::delete_by_chassis(conn, chassis).await;
                return Err(err.into());
            }
        }
    }

    if let Err(err) = vehicle::repository::set_status(conn, chassis, VehicleStatus::Sold).await {
        let _ = lease::repository::delete_uncollected_by_chassis(conn, chassis).await;
        let _ = repository::delete_detail_by_chassis(conn, chassis).await;
        let _ = repository::delete_by_chassis(conn, chassis).await;
        return Err(err.into());
    }

    Ok(sale)
}

async fn find_pending(conn: &mut DbConn, chassis: &str) -> Result<models::Sale, SaleFlowError> {
    let sale = repository::find_by_chassis(conn, chassis)
        .await?
        .ok_or(SaleFlowError::SaleNotFound)?;

    if sale.status != SaleStatus::Pending.to_string() {
        return Err(SaleFlowError::SaleNotPending);
    }

    Ok(sale)
}

/// commits a pending sale
pub async fn confirm_sale(
    conn: &mut DbConn,
    chassis: &str,
) -> Result<models::Sale, SaleFlowError> {
    find_pending(conn, chassis).await?;

    Ok(repository::set_sale_status(conn, chassis, SaleStatus::Confirmed).await?)
}

/// Cancels a pending sale, compensating every write of [`open_sale`] in
/// reverse order and restoring the vehicle to `available`.
pub async fn cancel_sale(conn: &mut DbConn, chassis: &str) -> Result<(), SaleFlowError> {
    find_pending(conn, chassis).await?;

    lease::repository::delete_uncollected_by_chassis(conn, chassis).await?;
    repository::delete_detail_by_chassis(conn, chassis).await?;
    repository::delete_by_chassis(conn, chassis).await?;
    vehicle::repository::set_status(conn, chassis, VehicleStatus::Available).await?;

    Ok(())
}

/// Derives the settlement figures of a sale from its rows, other charges are
/// additive only and never subtracted from the settlement.
pub fn settlement_of(
    sale: &models::Sale,
    detail: Option<&models::TransactionDetail>,
    total_advance: f64,
) -> SettlementDto {
    let balance_after_advance = pricing::round2(sale.sold_price_lkr - total_advance);

    let lease_amount = detail.and_then(|d| d.lease_amount_lkr);

    let other_charges = detail
        .map(|d| {
            pricing::round2(
                d.registration_fee_lkr.unwrap_or(0.0)
                    + d.valuation_fee_lkr.unwrap_or(0.0)
                    + d.licence_fee_lkr.unwrap_or(0.0),
            )
        })
        .unwrap_or(0.0);

    SettlementDto {
        total_advance_lkr: total_advance,
        balance_after_advance_lkr: balance_after_advance,
        lease_amount_lkr: lease_amount,
        balance_settlement_lkr: pricing::balance_settlement(balance_after_advance, lease_amount),
        other_charges_lkr: other_charges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn sale_of(sold_price_lkr: f64) -> models::Sale {
        models::Sale {
            id: 1,
            created_at: Utc::now(),
            updated_at: None,
            chassis_number: String::from("NZE121-3123785"),
            status: SaleStatus::Pending.to_string(),
            sold_price: sold_price_lkr,
            sold_currency: String::from("LKR"),
            conversion_rate: 1.0,
            sold_price_lkr,
            profit_lkr: 0.0,
            sold_on: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            customer_name: String::from("K. Perera"),
            customer_phone: None,
            customer_address: None,
            customer_nic: None,
        }
    }

    fn detail(
        lease_amount_lkr: Option<f64>,
        registration_fee_lkr: Option<f64>,
    ) -> models::TransactionDetail {
        models::TransactionDetail {
            id: 1,
            created_at: Utc::now(),
            chassis_number: String::from("NZE121-3123785"),
            leasing_company: lease_amount_lkr.map(|_| String::from("LB Finance")),
            lease_amount_lkr,
            cheque_number: None,
            cheque_amount_lkr: None,
            cash_amount_lkr: None,
            registration_fee_lkr,
            valuation_fee_lkr: None,
            licence_fee_lkr: None,
        }
    }

    #[test]
    fn settlement_subtracts_advances_and_lease_only() {
        let sale = sale_of(3_500_000.0);
        let detail = detail(Some(1_500_000.0), Some(45_000.0));

        let settlement = settlement_of(&sale, Some(&detail), 800_000.0);

        assert_eq!(settlement.balance_after_advance_lkr, 2_700_000.0);
        assert_eq!(settlement.balance_settlement_lkr, 1_200_000.0);
        // tracked, but not part of the settlement figure
        assert_eq!(settlement.other_charges_lkr, 45_000.0);
    }

    #[test]
    fn settlement_without_leasing_is_the_balance_after_advance() {
        let sale = sale_of(3_500_000.0);

        let settlement = settlement_of(&sale, None, 800_000.0);

        assert_eq!(settlement.lease_amount_lkr, None);
        assert_eq!(settlement.balance_settlement_lkr, 2_700_000.0);
        assert_eq!(settlement.other_charges_lkr, 0.0);
    }
}
