use super::costs::ResolvedCosts;
use super::dto::{CreateVehicleDto, UpdateCostsDto, UpdateDetailsDto};
use crate::database::db::DbConn;
use crate::database::error::DbError;
use crate::database::{models, schema};
use crate::modules::common::dto::Pagination;
use crate::pricing::VehicleStatus;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

pub async fn create_vehicle(
    conn: &mut DbConn,
    dto: &CreateVehicleDto,
    initial_status: VehicleStatus,
    resolved: ResolvedCosts,
) -> Result<models::Vehicle, DbError> {
    let new_vehicle = models::NewVehicle {
        chassis_number: dto.chassis_number.clone(),
        maker: dto.maker.clone(),
        model: dto.model.clone(),
        manufacture_year: dto.manufacture_year,
        mileage_km: dto.mileage_km,
        status: initial_status.to_string(),
        bid_price_jpy: dto.bid_price_jpy,
        commission_jpy: dto.commission_jpy,
        insurance_jpy: dto.insurance_jpy,
        inland_transport_jpy: dto.inland_transport_jpy,
        other_cost_label: dto.other_cost_label.clone(),
        other_cost_jpy: dto.other_cost_jpy,
        invoice_amount_jpy: dto.invoice_amount_jpy,
        invoice_rate: dto.invoice_rate,
        undial_amount_jpy: resolved.undial_amount_jpy,
        undial_rate: dto.undial_rate,
        tax_lkr: dto.tax_lkr,
        clearance_lkr: dto.clearance_lkr,
        transport_lkr: dto.transport_lkr,
        extra_1_label: dto.extra_1_label.clone(),
        extra_1_lkr: dto.extra_1_lkr,
        extra_2_label: dto.extra_2_label.clone(),
        extra_2_lkr: dto.extra_2_lkr,
        extra_3_label: dto.extra_3_label.clone(),
        extra_3_lkr: dto.extra_3_lkr,
        japan_total_lkr: resolved.japan_total_lkr,
        final_total_lkr: resolved.final_total_lkr,
        buy_price: dto.buy_price,
        buy_currency: dto.buy_currency.map(|c| c.to_string()),
    };

    Ok(diesel::insert_into(schema::vehicle::dsl::vehicle)
        .values(new_vehicle)
        .get_result::<models::Vehicle>(conn)
        .await?)
}

/// finds a vehicle by its chassis number, `DbError` maps the missing
/// row to a not found response
pub async fn find_by_chassis(
    conn: &mut DbConn,
    chassis: &str,
) -> Result<models::Vehicle, DbError> {
    use schema::vehicle::dsl::*;

    Ok(vehicle
        .filter(chassis_number.eq(chassis))
        .select(models::Vehicle::as_select())
        .first::<models::Vehicle>(conn)
        .await?)
}

pub async fn list_vehicles(
    conn: &mut DbConn,
    status_filter: Option<VehicleStatus>,
    search: Option<&str>,
    pagination: Pagination,
) -> Result<(Vec<models::Vehicle>, i64), DbError> {
    use schema::vehicle::dsl::*;

    let mut query = vehicle.into_boxed();
    let mut count_query = vehicle.into_boxed();

    if let Some(wanted_status) = status_filter {
        query = query.filter(status.eq(wanted_status.to_string()));
        count_query = count_query.filter(status.eq(wanted_status.to_string()));
    }

    if let Some(term) = search {
        let pattern = format!("%{}%", term);

        query = query.filter(
            chassis_number
                .ilike(pattern.clone())
                .or(maker.ilike(pattern.clone()))
                .or(model.ilike(pattern.clone())),
        );
        count_query = count_query.filter(
            chassis_number
                .ilike(pattern.clone())
                .or(maker.ilike(pattern.clone()))
                .or(model.ilike(pattern)),
        );
    }

    let records = query
        .order(created_at.desc())
        .limit(pagination.page_size)
        .offset(pagination.offset())
        .select(models::Vehicle::as_select())
        .load::<models::Vehicle>(conn)
        .await?;

    let item_count = count_query.count().get_result::<i64>(conn).await?;

    Ok((records, item_count))
}

pub async fn update_costs(
    conn: &mut DbConn,
    chassis: &str,
    dto: &UpdateCostsDto,
    resolved: ResolvedCosts,
) -> Result<models::Vehicle, DbError> {
    use schema::vehicle::dsl::*;

    Ok(
        diesel::update(vehicle.filter(chassis_number.eq(chassis)))
            .set((
                bid_price_jpy.eq(dto.bid_price_jpy),
                commission_jpy.eq(dto.commission_jpy),
                insurance_jpy.eq(dto.insurance_jpy),
                inland_transport_jpy.eq(dto.inland_transport_jpy),
                other_cost_label.eq(&dto.other_cost_label),
                other_cost_jpy.eq(dto.other_cost_jpy),
                invoice_amount_jpy.eq(dto.invoice_amount_jpy),
                invoice_rate.eq(dto.invoice_rate),
                undial_amount_jpy.eq(resolved.undial_amount_jpy),
                undial_rate.eq(dto.undial_rate),
                tax_lkr.eq(dto.tax_lkr),
                clearance_lkr.eq(dto.clearance_lkr),
                transport_lkr.eq(dto.transport_lkr),
                extra_1_label.eq(&dto.extra_1_label),
                extra_1_lkr.eq(dto.extra_1_lkr),
                extra_2_label.eq(&dto.extra_2_label),
                extra_2_lkr.eq(dto.extra_2_lkr),
                extra_3_label.eq(&dto.extra_3_label),
                extra_3_lkr.eq(dto.extra_3_lkr),
                japan_total_lkr.eq(resolved.japan_total_lkr),
                final_total_lkr.eq(resolved.final_total_lkr),
                buy_price.eq(dto.buy_price),
                buy_currency.eq(dto.buy_currency.map(|c| c.to_string())),
                updated_at.eq(Utc::now()),
            ))
            .get_result::<models::Vehicle>(conn)
            .await?,
    )
}

pub async fn update_details(
    conn: &mut DbConn,
    chassis: &str,
    dto: &UpdateDetailsDto,
) -> Result<models::Vehicle, DbError> {
    use schema::vehicle::dsl::*;

    Ok(
        diesel::update(vehicle.filter(chassis_number.eq(chassis)))
            .set((
                engine_number.eq(&dto.engine_number),
                engine_capacity.eq(&dto.engine_capacity),
                colour.eq(&dto.colour),
                fuel_type.eq(&dto.fuel_type),
                seating_capacity.eq(dto.seating_capacity),
                updated_at.eq(Utc::now()),
            ))
            .get_result::<models::Vehicle>(conn)
            .await?,
    )
}

pub async fn set_status(
    conn: &mut DbConn,
    chassis: &str,
    new_status: VehicleStatus,
) -> Result<models::Vehicle, DbError> {
    use schema::vehicle::dsl::*;

    Ok(
        diesel::update(vehicle.filter(chassis_number.eq(chassis)))
            .set((status.eq(new_status.to_string()), updated_at.eq(Utc::now())))
            .get_result::<models::Vehicle>(conn)
            .await?,
    )
}

/// deletes a vehicle row, the advances, payments, sale, transaction details
/// and lease collections referencing it go with it (`ON DELETE CASCADE`)
pub async fn delete_by_chassis(conn: &mut DbConn, chassis: &str) -> Result<usize, DbError> {
    use schema::vehicle::dsl::*;

    Ok(
        diesel::delete(vehicle.filter(chassis_number.eq(chassis)))
            .execute(conn)
            .await?,
    )
}
