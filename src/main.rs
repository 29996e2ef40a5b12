mod config;
mod database;
mod modules;
mod pricing;
mod server;
mod services;
mod utils;

use config::app_config;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cfg = app_config();

    database::db::run_migrations(&cfg.db_url);

    let db_conn_pool = database::db::get_connection_pool(&cfg.db_url).await;
    let app = server::controller::create_axum_app(db_conn_pool);

    let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)), cfg.http_port);
    info!("[WEB] listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service_with_connect_info::<SocketAddr>())
        .await
        .unwrap();
}
