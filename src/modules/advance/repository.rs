use super::dto::{CreateAdvanceDto, CreatePaymentDto};
use crate::database::db::DbConn;
use crate::database::error::DbError;
use crate::database::{models, schema};
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

/// loads the advance of a vehicle, `None` means no advance was taken yet
/// and is not a error
pub async fn find_by_chassis(
    conn: &mut DbConn,
    chassis: &str,
) -> Result<Option<models::Advance>, DbError> {
    use schema::advance::dsl::*;

    Ok(advance
        .filter(chassis_number.eq(chassis))
        .select(models::Advance::as_select())
        .first::<models::Advance>(conn)
        .await
        .optional()?)
}

/// creates the advance record of a vehicle together with its opening payment
pub async fn create_with_first_payment(
    conn: &mut DbConn,
    chassis: &str,
    dto: &CreateAdvanceDto,
) -> Result<(models::Advance, models::AdvancePayment), DbError> {
    let created = conn
        .transaction::<_, diesel::result::Error, _>(|conn| {
            async move {
                let created_advance =
                    diesel::insert_into(schema::advance::dsl::advance)
                        .values((
                            schema::advance::dsl::chassis_number.eq(chassis),
                            schema::advance::dsl::customer_name.eq(&dto.customer_name),
                            schema::advance::dsl::customer_phone.eq(&dto.customer_phone),
                            schema::advance::dsl::customer_address.eq(&dto.customer_address),
                            schema::advance::dsl::customer_nic.eq(&dto.customer_nic),
                            schema::advance::dsl::selling_price_lkr.eq(dto.selling_price_lkr),
                        ))
                        .get_result::<models::Advance>(conn)
                        .await?;

                let created_payment =
                    diesel::insert_into(schema::advance_payment::dsl::advance_payment)
                        .values((
                            schema::advance_payment::dsl::chassis_number.eq(chassis),
                            schema::advance_payment::dsl::amount_lkr
                                .eq(dto.first_payment.amount_lkr),
                            schema::advance_payment::dsl::paid_on.eq(dto.first_payment.paid_on),
                            schema::advance_payment::dsl::bank.eq(&dto.first_payment.bank),
                            schema::advance_payment::dsl::branch.eq(&dto.first_payment.branch),
                            schema::advance_payment::dsl::reference
                                .eq(&dto.first_payment.reference),
                        ))
                        .get_result::<models::AdvancePayment>(conn)
                        .await?;

                Ok((created_advance, created_payment))
            }
            .scope_boxed()
        })
        .await?;

    Ok(created)
}

/// the append only payment ledger of a vehicle, oldest first
pub async fn list_payments(
    conn: &mut DbConn,
    chassis: &str,
) -> Result<Vec<models::AdvancePayment>, DbError> {
    use schema::advance_payment::dsl::*;

    Ok(advance_payment
        .filter(chassis_number.eq(chassis))
        .order((paid_on.asc(), id.asc()))
        .select(models::AdvancePayment::as_select())
        .load::<models::AdvancePayment>(conn)
        .await?)
}

pub async fn add_payment(
    conn: &mut DbConn,
    chassis: &str,
    dto: &CreatePaymentDto,
) -> Result<models::AdvancePayment, DbError> {
    use schema::advance_payment::dsl::*;

    Ok(
        diesel::insert_into(advance_payment)
            .values((
                chassis_number.eq(chassis),
                amount_lkr.eq(dto.amount_lkr),
                paid_on.eq(dto.paid_on),
                bank.eq(&dto.bank),
                branch.eq(&dto.branch),
                reference.eq(&dto.reference),
            ))
            .get_result::<models::AdvancePayment>(conn)
            .await?,
    )
}
