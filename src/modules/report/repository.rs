use crate::database::db::DbConn;
use crate::database::error::DbError;
use crate::database::{models, schema};
use crate::pricing::VehicleStatus;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use std::collections::HashMap;

/// vehicles still on the books, in stock and not yet listed ones
pub async fn list_unsold_vehicles(conn: &mut DbConn) -> Result<Vec<models::Vehicle>, DbError> {
    use schema::vehicle::dsl::*;

    Ok(vehicle
        .filter(status.ne(VehicleStatus::Sold.to_string()))
        .order(created_at.asc())
        .select(models::Vehicle::as_select())
        .load::<models::Vehicle>(conn)
        .await?)
}

pub async fn list_advances(conn: &mut DbConn) -> Result<Vec<models::Advance>, DbError> {
    use schema::advance::dsl::*;

    Ok(advance
        .order(created_at.asc())
        .select(models::Advance::as_select())
        .load::<models::Advance>(conn)
        .await?)
}

/// total advance paid per chassis number, one grouped query for the
/// outstanding advances report
pub async fn payment_totals_by_chassis(
    conn: &mut DbConn,
) -> Result<HashMap<String, f64>, DbError> {
    use diesel::dsl::sum;
    use schema::advance_payment::dsl::*;

    let totals: Vec<(String, Option<f64>)> = advance_payment
        .group_by(chassis_number)
        .select((chassis_number, sum(amount_lkr)))
        .load::<(String, Option<f64>)>(conn)
        .await?;

    Ok(totals
        .into_iter()
        .map(|(chassis, total)| (chassis, total.unwrap_or(0.0)))
        .collect())
}
