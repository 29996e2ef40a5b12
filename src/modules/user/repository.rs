use crate::database::db::DbConn;
use crate::database::error::DbError;
use crate::database::{models, schema};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

pub async fn list_users(conn: &mut DbConn) -> Result<Vec<models::User>, DbError> {
    use schema::user::dsl::*;

    Ok(user
        .order(created_at.asc())
        .select(models::User::as_select())
        .load::<models::User>(conn)
        .await?)
}
