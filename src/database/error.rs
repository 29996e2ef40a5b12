use crate::modules::common::responses::{internal_error_res, SimpleError};
use convert_case::{Case, Casing};
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};
use http::StatusCode;

/// Wrapper for diesel errors.
///
/// This is useful for wrapping database errors and safely returning them from
/// axum route handlers without worrying about leaking sensitive information.
pub struct DbError(DieselError);

impl From<DieselError> for DbError {
    fn from(err: DieselError) -> Self {
        DbError(err)
    }
}

impl From<DbError> for (StatusCode, SimpleError) {
    fn from(err: DbError) -> Self {
        match err.0 {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                if let Some(column_name) = get_column_name_from_db_error_info(info.as_ref()) {
                    let error_code = format!("{}_IN_USE", column_name.to_case(Case::ScreamingSnake));

                    return (StatusCode::BAD_REQUEST, SimpleError::from(error_code));
                }

                internal_error_res()
            }

            DieselError::NotFound => (StatusCode::NOT_FOUND, SimpleError::from("entity not found")),

            _ => internal_error_res(),
        }
    }
}

/// Returns the column name from the database error information.
///
/// When the error does not carry the column directly it is extracted from the
/// violated unique constraint, assuming the `<table>_<column>_unique` naming
/// pattern used by the migrations.
fn get_column_name_from_db_error_info(info: &dyn DatabaseErrorInformation) -> Option<&str> {
    if let Some(column) = info.column_name() {
        return Some(column);
    }

    let constraint = info.constraint_name()?;
    let table = info.table_name()?;

    constraint
        .strip_suffix("_unique")?
        .strip_prefix(table)?
        .strip_prefix('_')
}
