//! Result Cache Client
//!
//! Owns its Redis client and connection. The connection is established once via
//! [`ResultCache::connect_with_retry`]; afterwards an individual operation
//! failure is returned to the caller to log and skip, never escalated. When the
//! connection was never established (degraded mode), writes fail and snapshot
//! reads return an empty map.

use super::types::{EntryState, VALUES_KEY};
use crate::transport::{RetryPolicy, TransportStatus};

use anyhow::Result;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use std::collections::HashMap;
use tokio::sync::RwLock;

pub struct ResultCache {
    client: redis::Client,
    conn: RwLock<Option<MultiplexedConnection>>,
}

impl ResultCache {
    /// Wraps a Redis client. No I/O happens until
    /// [`connect_with_retry`](Self::connect_with_retry) is called.
    pub fn new(client: redis::Client) -> Self {
        Self {
            client,
            conn: RwLock::new(None),
        }
    }

    /// Connects with a fixed backoff between attempts.
    ///
    /// Returns [`TransportStatus::Degraded`] once the policy's attempt limit is
    /// exhausted; the service keeps running either way.
    pub async fn connect_with_retry(&self, retry: &RetryPolicy) -> TransportStatus {
        let mut attempt = 0u32;

        loop {
            attempt += 1;
            match self.client.get_multiplexed_async_connection().await {
                Ok(conn) => {
                    *self.conn.write().await = Some(conn);
                    tracing::info!("Connected to result cache");
                    return TransportStatus::Connected;
                }
                Err(err) => {
                    tracing::error!("Failed to connect to result cache: {}", err);

                    if retry.exhausted(attempt) {
                        tracing::warn!(
                            "Giving up on result cache after {} attempts, continuing degraded",
                            attempt
                        );
                        return TransportStatus::Degraded;
                    }

                    tracing::info!(
                        "Retrying result cache connection in {}s (attempt {})",
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

    /// Writes the placeholder for a freshly accepted index.
    pub async fn set_placeholder(&self, index: u32) -> Result<()> {
        self.write_entry(index, EntryState::Placeholder).await
    }

    /// Overwrites the entry for `index` with its computed value. Last write
    /// wins; recomputing the same index is harmless since the values agree.
    pub async fn set_computed(&self, index: u32, value: u64) -> Result<()> {
        self.write_entry(index, EntryState::Computed(value)).await
    }

    async fn write_entry(&self, index: u32, state: EntryState) -> Result<()> {
        let mut conn = self
            .connection()
            .await
            .ok_or_else(|| anyhow::anyhow!("result cache connection not established"))?;

        let _: () = conn
            .hset(VALUES_KEY, index.to_string(), state.encode())
            .await?;

        Ok(())
    }

    /// Full snapshot of the cache, index string to raw field value.
    ///
    /// Returns an empty map when the cache is unreachable. Callers cannot tell
    /// "no entries" apart from "cache down"; that is the accepted degraded
    /// read behavior.
    pub async fn snapshot(&self) -> HashMap<String, String> {
        let Some(mut conn) = self.connection().await else {
            tracing::debug!("Result cache not connected, returning empty snapshot");
            return HashMap::new();
        };

        match conn.hgetall::<_, HashMap<String, String>>(VALUES_KEY).await {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!("Failed to read result cache snapshot: {}", err);
                HashMap::new()
            }
        }
    }

    async fn connection(&self) -> Option<MultiplexedConnection> {
        self.conn.read().await.clone()
    }
}
