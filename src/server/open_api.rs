use crate::database::models;
use crate::modules::{advance, auth, common, lease, report, sale, user, vehicle};
use crate::server::controller;
use crate::services::exchange_rate;
use axum::Router;
use utoipa::openapi::InfoBuilder;
use utoipa::{openapi::OpenApiBuilder, OpenApi};
use utoipa_rapidoc::RapiDoc;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    components(schemas(
        common::responses::SimpleError,
        common::dto::PaginatedVehicles,
        auth::dto::UserRole,
        auth::dto::UserDto,
        auth::dto::SignIn,
        auth::dto::SignInResponse,
        user::dto::CreateUserDto,
        models::Vehicle,
        models::Advance,
        models::AdvancePayment,
        models::Sale,
        models::TransactionDetail,
        models::LeaseCollection,
        vehicle::dto::CreateVehicleDto,
        vehicle::dto::UpdateCostsDto,
        vehicle::dto::UpdateStatusDto,
        vehicle::dto::UpdateDetailsDto,
        vehicle::dto::CostBreakdownDto,
        vehicle::dto::VehicleDetailsDto,
        advance::dto::CreateAdvanceDto,
        advance::dto::CreatePaymentDto,
        advance::dto::AdvanceSummaryDto,
        sale::dto::SaleStatus,
        sale::dto::OpenSaleDto,
        sale::dto::TransactionDetailDto,
        sale::dto::SettlementDto,
        sale::dto::SaleDetailsDto,
        lease::dto::CollectLeaseDto,
        report::dto::StockReportRow,
        report::dto::StockReportDto,
        report::dto::SalesReportRow,
        report::dto::SalesReportDto,
        report::dto::AdvanceReportRow,
        report::dto::AdvancesReportDto,
        report::dto::ReportFormat,
        exchange_rate::RateQuote,
        exchange_rate::RateSource,
        crate::pricing::Currency,
        crate::pricing::VehicleStatus,
    )),
    paths(
        controller::healthcheck,
        controller::exchange_rate,
        auth::routes::sign_in,
        auth::routes::sign_out,
        auth::routes::me,
        user::routes::list_users,
        user::routes::create_user,
        vehicle::routes::create_vehicle,
        vehicle::routes::list_vehicles,
        vehicle::routes::get_vehicle,
        vehicle::routes::update_costs,
        vehicle::routes::update_status,
        vehicle::routes::update_details,
        vehicle::routes::delete_vehicle,
        vehicle::routes::generate_invoice,
        advance::routes::get_advance,
        advance::routes::create_advance,
        advance::routes::add_payment,
        advance::routes::generate_receipt,
        sale::routes::open_sale,
        sale::routes::confirm_sale,
        sale::routes::cancel_sale,
        sale::routes::get_sale,
        sale::routes::generate_summary,
        lease::routes::list_collections,
        lease::routes::collect,
        report::routes::stock_report,
        report::routes::sales_report,
        report::routes::advances_report,
    )
)]
struct ApiDoc;

pub fn create_openapi_router() -> Router<controller::AppState> {
    let builder: OpenApiBuilder = ApiDoc::openapi().into();

    let info = InfoBuilder::new()
        .title("Carbooks API")
        .description(Some(
            "Bookkeeping API for vehicles imported from japanese auctions.",
        ))
        .version("0.0.1")
        .build();

    let api_doc = builder.info(info).build();

    Router::new()
        .merge(SwaggerUi::new("/swagger").url("/docs/swagger.json", api_doc.clone()))
        .merge(RapiDoc::with_openapi("/docs/openapi.json", api_doc).path("/rapidoc"))
}
