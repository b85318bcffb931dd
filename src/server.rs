//! HTTP server initialization and runtime setup.
//!
//! Handles response store selection, pipeline wiring and the Axum server lifecycle.

use crate::application::services::{PageService, RequestClient};
use crate::config::Config;
use crate::infrastructure::cache::{InMemoryCache, RedisCache, ResponseCache};
use crate::infrastructure::http::ReqwestGateway;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Selects the response store: Redis when configured and reachable, memory otherwise.
pub async fn build_cache(config: &Config) -> Arc<dyn ResponseCache> {
    if let Some(redis_url) = &config.redis_url {
        match RedisCache::connect(redis_url).await {
            Ok(redis) => {
                tracing::info!("Response store: Redis");
                return Arc::new(redis);
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Using InMemoryCache.", e);
            }
        }
    } else {
        tracing::info!("Response store: memory");
    }

    Arc::new(InMemoryCache::new())
}

/// Wires gateway, cache and services into a ready [`PageService`].
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub async fn build_page_service(
    config: &Config,
    cache: Arc<dyn ResponseCache>,
) -> Result<PageService> {
    let gateway = Arc::new(ReqwestGateway::new(&config.user_agent)?);
    let client = Arc::new(RequestClient::new(gateway, cache));

    Ok(PageService::from_client(
        client,
        config.characters_api_url.clone(),
        config.age_api_url.clone(),
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let cache = build_cache(&config).await;
    let page_service = Arc::new(build_page_service(&config, cache.clone()).await?);

    let state = AppState::new(page_service, cache);
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
