//! Ingestion service binary.
//!
//! Wires the transport clients together and serves the HTTP API. Startup never
//! fails on an unreachable transport: each client falls back to degraded mode
//! and the server comes up regardless.

use axum::routing::{get, post};
use axum::{Extension, Router};
use std::net::SocketAddr;
use std::sync::Arc;

use fib_pipeline::cache::client::ResultCache;
use fib_pipeline::channel::publisher::EventPublisher;
use fib_pipeline::config::Config;
use fib_pipeline::ingestion::handlers::{
    handle_health, handle_stats, handle_submit, handle_values_all, handle_values_current,
};
use fib_pipeline::log::store::ValueLog;
use fib_pipeline::log::writer::{LogWriter, DEFAULT_QUEUE_CAPACITY};
use fib_pipeline::transport::TransportStatus;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = Config::from_env();
    let retry = config.retry_policy();

    // 1. Result cache and event publisher, each owning a connection to the
    //    same broker:
    let redis_client = redis::Client::open(config.cache.url())?;

    let cache = Arc::new(ResultCache::new(redis_client.clone()));
    if cache.connect_with_retry(&retry).await == TransportStatus::Degraded {
        tracing::warn!("Result cache unavailable, reads will be empty and writes skipped");
    }

    let publisher = Arc::new(EventPublisher::new(redis_client));
    if publisher.connect_with_retry(&retry).await == TransportStatus::Degraded {
        tracing::warn!("Event channel unavailable, work events will be dropped");
    }

    // 2. Durable log. The pool is lazy, so an unreachable store delays nothing;
    //    schema bootstrap is retried implicitly by failing appends until the
    //    store comes up.
    let value_log = Arc::new(ValueLog::connect_lazy(&config.log_store)?);
    if let Err(err) = value_log.ensure_schema().await {
        tracing::warn!("Could not prepare the value log schema: {}", err);
    }
    let log_writer = Arc::new(LogWriter::spawn(value_log.clone(), DEFAULT_QUEUE_CAPACITY));

    // 3. HTTP router:
    let app = Router::new()
        .route("/", get(handle_health))
        .route("/submit", post(handle_submit))
        .route("/values/current", get(handle_values_current))
        .route("/values/all", get(handle_values_all))
        .route("/stats", get(handle_stats))
        .layer(Extension(cache))
        .layer(Extension(publisher))
        .layer(Extension(value_log))
        .layer(Extension(log_writer));

    // 4. Serve:
    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    tracing::info!("Ingestion service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
