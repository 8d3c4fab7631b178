use axum::Router;
use axum_server::tls_rustls::RustlsConfig;
use std::{env, net::SocketAddr, path::PathBuf};
use tokio::task::JoinHandle;

const DEFAULT_HTTP_PORT: u16 = 3001;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Ports {
    pub(crate) http: u16,
    pub(crate) https: Option<u16>,
}

impl Ports {
    /// Reads `PORT` and `HTTPS_PORT`.
    pub(crate) fn from_env() -> Result<Self, String> {
        let http = match env::var("PORT") {
            Ok(port) => parse_port("PORT", &port)?,
            Err(_) => DEFAULT_HTTP_PORT,
        };
        let https = env::var("HTTPS_PORT")
            .ok()
            .map(|port| parse_port("HTTPS_PORT", &port))
            .transpose()?;
        Ok(Self { http, https })
    }
}

fn parse_port(name: &str, value: &str) -> Result<u16, String> {
    value
        .parse()
        .map_err(|_| format!("{name} must be a port number, got {value}"))
}

pub(crate) struct TlsPaths {
    cert: PathBuf,
    key: PathBuf,
}

/// Certificate and key from `TLS_CERT_PATH` and `TLS_KEY_PATH`, when both are set.
pub(crate) fn tls_paths_from_env() -> Option<TlsPaths> {
    let cert = env::var("TLS_CERT_PATH").ok()?;
    let key = env::var("TLS_KEY_PATH").ok()?;
    Some(TlsPaths {
        cert: PathBuf::from(cert),
        key: PathBuf::from(key),
    })
}

pub(crate) fn spawn_http_server(port: u16, app: Router) -> JoinHandle<()> {
    tokio::spawn(async move {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        tracing::info!("HTTP server listening on {}", addr);
        let server = axum_server::bind(addr).serve(app.into_make_service());
        if let Err(e) = server.await {
            tracing::error!("HTTP server error: {}", e);
        }
    })
}

pub(crate) async fn spawn_https_server(
    port: u16,
    tls: TlsPaths,
    app: Router,
) -> Result<JoinHandle<()>, std::io::Error> {
    let config = RustlsConfig::from_pem_file(tls.cert, tls.key).await?;

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("HTTPS server listening on {}", addr);
    Ok(tokio::spawn(async move {
        if let Err(e) = axum_server::bind_rustls(addr, config)
            .serve(app.into_make_service())
            .await
        {
            tracing::error!("HTTPS server error: {}", e);
        }
    }))
}
