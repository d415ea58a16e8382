//! Worker Event Loop
//!
//! Subscribes to the event channel and processes messages one at a time. The
//! recursion runs on a blocking thread so the runtime stays responsive, but the
//! loop awaits each result before taking the next message, keeping processing
//! serial in arrival order.
//!
//! If the subscription stream ends (connection lost) or could not be opened
//! within the retry limit, the loop backs off and re-enters the subscribe
//! retry; the worker never terminates itself.

use super::compute::fib;
use crate::cache::client::ResultCache;
use crate::channel::subscriber::EventSubscriber;
use crate::channel::types::WorkEvent;
use crate::transport::RetryPolicy;

use anyhow::Result;
use futures::StreamExt;
use std::sync::Arc;

pub struct ComputeWorker {
    cache: Arc<ResultCache>,
    subscriber: EventSubscriber,
    retry: RetryPolicy,
}

impl ComputeWorker {
    pub fn new(cache: Arc<ResultCache>, subscriber: EventSubscriber, retry: RetryPolicy) -> Self {
        Self {
            cache,
            subscriber,
            retry,
        }
    }

    /// Runs forever: subscribe, drain messages, resubscribe on loss.
    pub async fn run(&self) {
        loop {
            let Some(mut pubsub) = self.subscriber.subscribe_with_retry(&self.retry).await else {
                tracing::warn!(
                    "Event channel unavailable, retrying subscription in {}s",
                    self.retry.backoff.as_secs()
                );
                tokio::time::sleep(self.retry.backoff).await;
                continue;
            };

            let mut messages = pubsub.on_message();
            while let Some(msg) = messages.next().await {
                let payload: String = match msg.get_payload() {
                    Ok(payload) => payload,
                    Err(err) => {
                        tracing::warn!("Dropping undecodable work event: {}", err);
                        continue;
                    }
                };

                if let Err(err) = self.handle_payload(&payload).await {
                    tracing::warn!("Dropping work event {:?}: {}", payload, err);
                }
            }

            tracing::warn!("Work event subscription closed, reconnecting");
        }
    }

    /// Processes one work event payload: parse, compute, persist.
    pub async fn handle_payload(&self, payload: &str) -> Result<()> {
        let event = WorkEvent::parse(payload)?;
        let index = event.index;
        tracing::info!("Received work event for index {}", index);

        let value = tokio::task::spawn_blocking(move || fib(index)).await?;
        tracing::info!("Computed fib({}) = {}", index, value);

        self.cache.set_computed(index, value).await?;

        Ok(())
    }
}
