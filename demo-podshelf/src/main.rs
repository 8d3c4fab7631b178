use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use podshelf_axum::{AppState, podshelf_router};

mod server;

use crate::server::{Ports, spawn_http_server, spawn_https_server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv().ok();
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,demo_podshelf=debug,podshelf=debug,podshelf_axum=debug".into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = AppState::from_env().await?;
    let app = podshelf_router(state);

    let ports = Ports::from_env()?;
    let http_server = spawn_http_server(ports.http, app.clone());

    match server::tls_paths_from_env() {
        Some(tls) => {
            let https_port = ports.https.ok_or("HTTPS_PORT must be set with TLS_CERT_PATH")?;
            // rustls needs a process-level CryptoProvider before the TLS config is built
            rustls::crypto::ring::default_provider()
                .install_default()
                .map_err(|_| "Failed to install default CryptoProvider")?;
            let https_server = spawn_https_server(https_port, tls, app).await?;
            tokio::try_join!(http_server, https_server)?;
        }
        None => http_server.await?,
    }
    Ok(())
}
