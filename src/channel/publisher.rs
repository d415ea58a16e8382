//! Event Publisher
//!
//! Ingestion-side end of the channel. Owns its own connection, separate from
//! the result cache's, so a publisher problem never takes cache writes down
//! with it. Publishing while disconnected returns an error the caller logs and
//! skips; the event is simply lost, per the channel's at-most-once contract.

use super::types::{WorkEvent, WORK_TOPIC};
use crate::transport::{RetryPolicy, TransportStatus};

use anyhow::Result;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use tokio::sync::RwLock;

pub struct EventPublisher {
    client: redis::Client,
    conn: RwLock<Option<MultiplexedConnection>>,
}

impl EventPublisher {
    pub fn new(client: redis::Client) -> Self {
        Self {
            client,
            conn: RwLock::new(None),
        }
    }

    /// Connects with a fixed backoff between attempts. Returns
    /// [`TransportStatus::Degraded`] once the attempt limit is exhausted.
    pub async fn connect_with_retry(&self, retry: &RetryPolicy) -> TransportStatus {
        let mut attempt = 0u32;

        loop {
            attempt += 1;
            match self.client.get_multiplexed_async_connection().await {
                Ok(conn) => {
                    *self.conn.write().await = Some(conn);
                    tracing::info!("Event publisher connected");
                    return TransportStatus::Connected;
                }
                Err(err) => {
                    tracing::error!("Failed to connect event publisher: {}", err);

                    if retry.exhausted(attempt) {
                        tracing::warn!(
                            "Giving up on event publisher after {} attempts, continuing degraded",
                            attempt
                        );
                        return TransportStatus::Degraded;
                    }

                    tracing::info!(
                        "Retrying event publisher connection in {}s (attempt {})",
                        retry.backoff.as_secs(),
                        attempt
                    );
                    tokio::time::sleep(retry.backoff).await;
                }
            }
        }
    }

    pub async fn is_connected(&self) -> bool {
        self.conn.read().await.is_some()
    }

    /// Publishes a work event. Non-blocking beyond the round-trip itself; with
    /// zero subscribers attached the message is dropped by the broker.
    pub async fn publish(&self, event: &WorkEvent) -> Result<()> {
        let mut conn = self
            .conn
            .read()
            .await
            .clone()
            .ok_or_else(|| anyhow::anyhow!("event publisher connection not established"))?;

        let _: () = conn.publish(WORK_TOPIC, event.payload()).await?;

        Ok(())
    }
}
