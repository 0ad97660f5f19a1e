use anyhow::{Context, Result};
use rmcp::transport::streamable_http_server::session::local::LocalSessionManager;
use rmcp::transport::streamable_http_server::{StreamableHttpServerConfig, StreamableHttpService};
use rmcp::ServiceExt;

use crate::args::{ServerSettings, Transport};
use crate::tools::QueryJsonFileService;

/// Path the streamable HTTP endpoint is mounted at.
pub const HTTP_ENDPOINT: &str = "/mcp";

pub async fn serve(service: QueryJsonFileService, settings: &ServerSettings) -> Result<()> {
    match settings.transport {
        Transport::Stdio => serve_stdio(service).await,
        Transport::Http => serve_http(service, &settings.host, settings.port).await,
    }
}

async fn serve_stdio(service: QueryJsonFileService) -> Result<()> {
    let server = service
        .serve(rmcp::transport::stdio())
        .await
        .context("start stdio transport")?;
    server.waiting().await?;
    Ok(())
}

/// Axum router with the streamable HTTP transport mounted at [`HTTP_ENDPOINT`].
pub fn http_router(service: QueryJsonFileService) -> axum::Router {
    // One service per session; the toolkit inside is shared.
    let http_service = StreamableHttpService::new(
        move || Ok(service.clone()),
        LocalSessionManager::default().into(),
        StreamableHttpServerConfig::default(),
    );
    axum::Router::new().nest_service(HTTP_ENDPOINT, http_service)
}

async fn serve_http(service: QueryJsonFileService, host: &str, port: u16) -> Result<()> {
    let listener = tokio::net::TcpListener::bind((host, port))
        .await
        .with_context(|| format!("bind http transport to {host}:{port}"))?;
    log::info!("Server will be available at http://{host}:{port}{HTTP_ENDPOINT}");

    axum::serve(listener, http_router(service))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .context("http transport")?;
    Ok(())
}
