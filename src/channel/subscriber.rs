//! Event Subscriber
//!
//! Worker-side end of the channel. Pub/sub needs a dedicated connection (a
//! subscribed Redis connection cannot issue other commands), so the subscriber
//! holds the client and opens a fresh pub/sub connection each time the worker
//! (re)subscribes.

use super::types::WORK_TOPIC;
use crate::transport::RetryPolicy;

use redis::aio::PubSub;

pub struct EventSubscriber {
    client: redis::Client,
}

impl EventSubscriber {
    pub fn new(client: redis::Client) -> Self {
        Self { client }
    }

    /// Opens a pub/sub connection and subscribes to the work topic, retrying
    /// with a fixed backoff.
    ///
    /// Returns `None` once the attempt limit is exhausted; the worker then has
    /// no event source until it tries again.
    pub async fn subscribe_with_retry(&self, retry: &RetryPolicy) -> Option<PubSub> {
        let mut attempt = 0u32;

        loop {
            attempt += 1;
            match self.open_subscription().await {
                Ok(pubsub) => {
                    tracing::info!("Subscribed to work events on {:?}", WORK_TOPIC);
                    return Some(pubsub);
                }
                Err(err) => {
                    tracing::error!("Failed to subscribe to work events: {}", err);

                    if retry.exhausted(attempt) {
                        tracing::warn!(
                            "Giving up on event subscription after {} attempts",
                            attempt
                        );
                        return None;
                    }

                    tracing::info!(
                        "Retrying event subscription in {}s (attempt {})",
                        retry.backoff.as_secs(),
                        attempt
                    );
                    tokio::time::sleep(retry.backoff).await;
                }
            }
        }
    }

    async fn open_subscription(&self) -> redis::RedisResult<PubSub> {
        let mut pubsub = self.client.get_async_pubsub().await?;
        pubsub.subscribe(WORK_TOPIC).await?;
        Ok(pubsub)
    }
}
