use super::dto::CollectLeaseDto;
use crate::database::db::DbConn;
use crate::database::error::DbError;
use crate::database::{models, schema};
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

/// opens a collection for the amount a leasing company owes on a sale
pub async fn insert_collection(
    conn: &mut DbConn,
    chassis: &str,
    leasing_company: &str,
    amount_due: f64,
) -> Result<models::LeaseCollection, DbError> {
    use schema::lease_collection::dsl::*;

    Ok(diesel::insert_into(lease_collection)
        .values((
            chassis_number.eq(chassis),
            company.eq(leasing_company),
            amount_due_lkr.eq(amount_due),
            collected.eq(false),
        ))
        .get_result::<models::LeaseCollection>(conn)
        .await?)
}

pub async fn list_collections(
    conn: &mut DbConn,
    collected_filter: Option<bool>,
) -> Result<Vec<models::LeaseCollection>, DbError> {
    use schema::lease_collection::dsl::*;

    let mut query = lease_collection.into_boxed();

    if let Some(wanted) = collected_filter {
        query = query.filter(collected.eq(wanted));
    }

    Ok(query
        .order(created_at.desc())
        .select(models::LeaseCollection::as_select())
        .load::<models::LeaseCollection>(conn)
        .await?)
}

pub async fn mark_collected(
    conn: &mut DbConn,
    collection_id: i32,
    dto: &CollectLeaseDto,
) -> Result<models::LeaseCollection, DbError> {
    use schema::lease_collection::dsl::*;

    Ok(diesel::update(lease_collection.find(collection_id))
        .set((
            collected.eq(true),
            cheque_amount_lkr.eq(dto.cheque_amount_lkr),
            personal_loan_amount_lkr.eq(dto.personal_loan_amount_lkr),
            collected_on.eq(dto.collected_on),
            updated_at.eq(Utc::now()),
        ))
        .get_result::<models::LeaseCollection>(conn)
        .await?)
}

/// compensating delete used when a pending sale is cancelled, collected
/// rows are settled money and are never removed here
pub async fn delete_uncollected_by_chassis(
    conn: &mut DbConn,
    chassis: &str,
) -> Result<usize, DbError> {
    use schema::lease_collection::dsl::*;

    Ok(diesel::delete(
        lease_collection
            .filter(chassis_number.eq(chassis))
            .filter(collected.eq(false)),
    )
    .execute(conn)
    .await?)
}
