//! Asynchronous Log Writer
//!
//! Ingestion must acknowledge a submission without waiting on the log store,
//! but plain fire-and-forget spawning leaves failures invisible and unbounded.
//! The writer puts a bounded queue in front of the store: `submit` never
//! blocks, a full queue drops the entry, and every outcome is counted so
//! degraded operation is observable (see `GET /stats`).
//!
//! The consumer task is generic over its sink, which lets tests drive the
//! counters without a live store.

use super::store::ValueLog;

use anyhow::Result;
use serde::Serialize;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

/// Queue capacity used by the ingestion service.
pub const DEFAULT_QUEUE_CAPACITY: usize = 1024;

#[derive(Debug, Default)]
struct DispatchStats {
    enqueued: AtomicU64,
    written: AtomicU64,
    dropped: AtomicU64,
    failed: AtomicU64,
}

/// Point-in-time view of the writer's counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DispatchCounters {
    /// Accepted into the queue.
    pub enqueued: u64,
    /// Persisted to the store.
    pub written: u64,
    /// Rejected at enqueue time (queue full or writer stopped).
    pub dropped: u64,
    /// Dequeued but the store append failed; the entry is lost.
    pub failed: u64,
}

pub struct LogWriter {
    tx: mpsc::Sender<u32>,
    stats: Arc<DispatchStats>,
}

impl LogWriter {
    /// Spawns a writer draining into the value log.
    pub fn spawn(log: Arc<ValueLog>, capacity: usize) -> Self {
        Self::spawn_with_sink(capacity, move |index| {
            let log = log.clone();
            async move { log.append(index).await }
        })
    }

    /// Spawns a writer draining into an arbitrary sink.
    pub fn spawn_with_sink<S, Fut>(capacity: usize, mut sink: S) -> Self
    where
        S: FnMut(u32) -> Fut + Send + 'static,
        Fut: Future<Output = Result<()>> + Send,
    {
        let (tx, mut rx) = mpsc::channel::<u32>(capacity);
        let stats = Arc::new(DispatchStats::default());
        let consumer_stats = stats.clone();

        tokio::spawn(async move {
            while let Some(index) = rx.recv().await {
                match sink(index).await {
                    Ok(()) => {
                        consumer_stats.written.fetch_add(1, Ordering::Relaxed);
                    }
                    Err(err) => {
                        consumer_stats.failed.fetch_add(1, Ordering::Relaxed);
                        tracing::warn!("Failed to append {} to the durable log: {}", index, err);
                    }
                }
            }
        });

        Self { tx, stats }
    }

    /// Enqueues one log append. Never blocks; a full queue drops the entry and
    /// counts the drop.
    pub fn submit(&self, index: u32) {
        match self.tx.try_send(index) {
            Ok(()) => {
                self.stats.enqueued.fetch_add(1, Ordering::Relaxed);
            }
            Err(TrySendError::Full(index)) => {
                self.stats.dropped.fetch_add(1, Ordering::Relaxed);
                tracing::warn!("Log queue full, dropping entry for {}", index);
            }
            Err(TrySendError::Closed(index)) => {
                self.stats.dropped.fetch_add(1, Ordering::Relaxed);
                tracing::error!("Log writer stopped, dropping entry for {}", index);
            }
        }
    }

    pub fn counters(&self) -> DispatchCounters {
        DispatchCounters {
            enqueued: self.stats.enqueued.load(Ordering::Relaxed),
            written: self.stats.written.load(Ordering::Relaxed),
            dropped: self.stats.dropped.load(Ordering::Relaxed),
            failed: self.stats.failed.load(Ordering::Relaxed),
        }
    }
}
