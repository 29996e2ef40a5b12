use super::dto::{OpenSaleDto, SaleStatus, TransactionDetailDto};
use crate::database::db::DbConn;
use crate::database::error::DbError;
use crate::database::{models, schema};
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

pub async fn insert_sale(
    conn: &mut DbConn,
    chassis: &str,
    dto: &OpenSaleDto,
    rate: f64,
    sold_price_lkr: f64,
    profit_lkr: f64,
) -> Result<models::Sale, DbError> {
    use schema::sale::dsl;

    Ok(diesel::insert_into(dsl::sale)
        .values((
            dsl::chassis_number.eq(chassis),
            dsl::status.eq(SaleStatus::Pending.to_string()),
            dsl::sold_price.eq(dto.sold_price),
            dsl::sold_currency.eq(dto.sold_currency.to_string()),
            dsl::conversion_rate.eq(rate),
            dsl::sold_price_lkr.eq(sold_price_lkr),
            dsl::profit_lkr.eq(profit_lkr),
            dsl::sold_on.eq(dto.sold_on),
            dsl::customer_name.eq(&dto.customer_name),
            dsl::customer_phone.eq(&dto.customer_phone),
            dsl::customer_address.eq(&dto.customer_address),
            dsl::customer_nic.eq(&dto.customer_nic),
        ))
        .get_result::<models::Sale>(conn)
        .await?)
}

pub async fn find_by_chassis(
    conn: &mut DbConn,
    chassis: &str,
) -> Result<Option<models::Sale>, DbError> {
    use schema::sale::dsl::*;

    Ok(sale
        .filter(chassis_number.eq(chassis))
        .select(models::Sale::as_select())
        .first::<models::Sale>(conn)
        .await
        .optional()?)
}

pub async fn set_sale_status(
    conn: &mut DbConn,
    chassis: &str,
    new_status: SaleStatus,
) -> Result<models::Sale, DbError> {
    use schema::sale::dsl::*;

    Ok(
        diesel::update(sale.filter(chassis_number.eq(chassis)))
            .set((status.eq(new_status.to_string()), updated_at.eq(Utc::now())))
            .get_result::<models::Sale>(conn)
            .await?,
    )
}

pub async fn delete_by_chassis(conn: &mut DbConn, chassis: &str) -> Result<usize, DbError> {
    use schema::sale::dsl::*;

    Ok(diesel::delete(sale.filter(chassis_number.eq(chassis)))
        .execute(conn)
        .await?)
}

pub async fn insert_transaction_detail(
    conn: &mut DbConn,
    chassis: &str,
    dto: &TransactionDetailDto,
) -> Result<models::TransactionDetail, DbError> {
    use schema::transaction_detail::dsl;

    Ok(diesel::insert_into(dsl::transaction_detail)
        .values((
            dsl::chassis_number.eq(chassis),
            dsl::leasing_company.eq(&dto.leasing_company),
            dsl::lease_amount_lkr.eq(dto.lease_amount_lkr),
            dsl::cheque_number.eq(&dto.cheque_number),
            dsl::cheque_amount_lkr.eq(dto.cheque_amount_lkr),
            dsl::cash_amount_lkr.eq(dto.cash_amount_lkr),
            dsl::registration_fee_lkr.eq(dto.registration_fee_lkr),
            dsl::valuation_fee_lkr.eq(dto.valuation_fee_lkr),
            dsl::licence_fee_lkr.eq(dto.licence_fee_lkr),
        ))
        .get_result::<models::TransactionDetail>(conn)
        .await?)
}

pub async fn find_detail_by_chassis(
    conn: &mut DbConn,
    chassis: &str,
) -> Result<Option<models::TransactionDetail>, DbError> {
    use schema::transaction_detail::dsl::*;

    Ok(transaction_detail
        .filter(chassis_number.eq(chassis))
        .select(models::TransactionDetail::as_select())
        .first::<models::TransactionDetail>(conn)
        .await
        .optional()?)
}

pub async fn delete_detail_by_chassis(
    conn: &mut DbConn,
    chassis: &str,
) -> Result<usize, DbError> {
    use schema::transaction_detail::dsl::*;

    Ok(
        diesel::delete(transaction_detail.filter(chassis_number.eq(chassis)))
            .execute(conn)
            .await?,
    )
}

/// sales confirmed inside a date range, newest first, for the sales report
pub async fn list_confirmed_in_range(
    conn: &mut DbConn,
    from: chrono::NaiveDate,
    to: chrono::NaiveDate,
) -> Result<Vec<(models::Sale, models::Vehicle)>, DbError> {
    use schema::{sale, vehicle};

    Ok(sale::dsl::sale
        .inner_join(
            vehicle::dsl::vehicle
                .on(vehicle::dsl::chassis_number.eq(sale::dsl::chassis_number)),
        )
        .filter(sale::dsl::status.eq(SaleStatus::Confirmed.to_string()))
        .filter(sale::dsl::sold_on.ge(from))
        .filter(sale::dsl::sold_on.le(to))
        .order(sale::dsl::sold_on.desc())
        .select((
            models::Sale::as_select(),
            models::Vehicle::as_select(),
        ))
        .load::<(models::Sale, models::Vehicle)>(conn)
        .await?)
}
