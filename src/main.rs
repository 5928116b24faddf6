use fleet_sales::{config::app_config, server, tracer};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tracing::info;

#[tokio::main]
async fn main() {
    let cfg = app_config();

    tracer::init(&cfg.log_filter, cfg.is_development).expect("[TRACER] failed to init tracer");

    let app = server::controller::new(cfg);

    let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), cfg.http_port);
    info!("[WEB] listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(server::shutdown::shutdown_signal())
        .await
        .expect("[WEB] failed to start server");
}
