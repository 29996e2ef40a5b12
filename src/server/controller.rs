use super::open_api;
use crate::{
    config::app_config,
    database::db::DbConn,
    modules::{
        advance,
        auth::{self, service::AuthService},
        common::responses::{internal_error_msg, SimpleError},
        lease, report, sale, user, vehicle,
    },
    services::exchange_rate::{ExchangeRateService, RateQuote},
};
use axum::{body::Body, extract::State, routing::get, Json, Router};
use axum_client_ip::SecureClientIpSource;
use diesel_async::{pooled_connection::deadpool::Pool, AsyncPgConnection};
use http::{header, HeaderValue, Method, Request, StatusCode};
use rand_chacha::ChaCha8Rng;
use rand_core::{OsRng, RngCore, SeedableRng};
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

/// The main application state, this is cloned for every HTTP request and
/// thus its fields should contain types that are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub db_conn_pool: Pool<AsyncPgConnection>,
    pub auth_service: AuthService,
    pub exchange_rate_service: ExchangeRateService,
}

impl AppState {
    pub async fn get_db_conn(&self) -> Result<DbConn, (StatusCode, SimpleError)> {
        self.db_conn_pool
            .get()
            .await
            .or(Err(internal_error_msg("failed to acquire a db connection")))
    }
}

/// Creates the main axum router to be served over http
pub fn create_axum_app(db_conn_pool: Pool<AsyncPgConnection>) -> Router {
    let rng = ChaCha8Rng::seed_from_u64(OsRng.next_u64());

    let state = AppState {
        db_conn_pool: db_conn_pool.clone(),
        auth_service: AuthService::new(db_conn_pool, rng),
        exchange_rate_service: ExchangeRateService::new(app_config().exchange_rate_url.clone()),
    };

    // URL.to_string for some reason adds a trailing slash
    // we need to remove it to avoid cors errors
    let mut frontend_origin = app_config().frontend_url.to_string();
    if frontend_origin.ends_with('/') {
        frontend_origin.pop();
    }

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_origin(
            frontend_origin
                .parse::<HeaderValue>()
                .expect("failed to parse CORS allowed origins"),
        )
        .allow_credentials(true)
        .allow_headers([header::ACCEPT, header::AUTHORIZATION, header::CONTENT_TYPE]);

    // extracts the client IP from the request, this is harder than it sounds and should be
    // done by a lib to deal with edge cases such as extracting the original IP from a header
    // set by cloudflare or other load balancers.
    let ip_extractor_layer = SecureClientIpSource::ConnectInfo.into_extension();

    let tracing_layer = TraceLayer::new_for_http()
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!("request: {} {}", request.method(), request.uri().path())
        })
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let global_middlewares = ServiceBuilder::new()
        .layer(ip_extractor_layer)
        .layer(tracing_layer)
        .layer(cors);

    Router::new()
        .merge(open_api::create_openapi_router())
        .route("/healthcheck", get(healthcheck))
        .route("/exchange-rate", get(exchange_rate))
        .nest("/auth", auth::routes::create_router(state.clone()))
        .nest("/user", user::routes::create_router(state.clone()))
        .nest("/vehicle", vehicle::routes::create_router(state.clone()))
        .nest("/advance", advance::routes::create_router(state.clone()))
        .nest("/sale", sale::routes::create_router(state.clone()))
        .nest(
            "/lease-collection",
            lease::routes::create_router(state.clone()),
        )
        .nest("/report", report::routes::create_router(state.clone()))
        .layer(global_middlewares)
        .with_state(state)
}

#[utoipa::path(
    get,
    tag = "meta",
    path = "/healthcheck",
    responses((status = OK)),
)]
pub async fn healthcheck() -> StatusCode {
    StatusCode::OK
}

/// Current JPY to LKR exchange rate
///
/// fetched from the configured endpoint with a short timeout, falling back
/// to a constant, the rate only seeds the editable rate fields on forms
#[utoipa::path(
    get,
    tag = "meta",
    path = "/exchange-rate",
    responses((status = OK, body = RateQuote)),
)]
pub async fn exchange_rate(State(state): State<AppState>) -> Json<RateQuote> {
    Json(state.exchange_rate_service.jpy_to_lkr().await)
}
