//! Compute worker binary.
//!
//! Connects the result cache and the event subscriber, then hands control to
//! the worker loop. Runs until killed; transport loss only ever degrades it.

use std::sync::Arc;

use fib_pipeline::cache::client::ResultCache;
use fib_pipeline::channel::subscriber::EventSubscriber;
use fib_pipeline::config::Config;
use fib_pipeline::transport::TransportStatus;
use fib_pipeline::worker::runner::ComputeWorker;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = Config::from_env();
    let retry = config.retry_policy();

    let redis_client = redis::Client::open(config.cache.url())?;

    let cache = Arc::new(ResultCache::new(redis_client.clone()));
    if cache.connect_with_retry(&retry).await == TransportStatus::Degraded {
        tracing::warn!("Result cache unavailable, computed results will be dropped");
    }

    let subscriber = EventSubscriber::new(redis_client);
    let worker = ComputeWorker::new(cache, subscriber, retry);

    tracing::info!("Compute worker started");
    worker.run().await;

    Ok(())
}
