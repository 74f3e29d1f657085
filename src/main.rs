use restoration_api::{app, config::ServerConfig, telemetry::init_telemetry};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_telemetry();

    let config = ServerConfig::from_env().expect("Invalid server configuration");

    let app = app();

    let listener = TcpListener::bind(config.bind_addr())
        .await
        .expect("Failed to bind port");
    info!(
        "Server starting at http://{}",
        listener.local_addr().unwrap()
    );

    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}
