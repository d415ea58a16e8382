//! Durable Log Tests
//!
//! Exercises the asynchronous writer's bounded queue and its observable
//! counters using injected sinks.
//!
//! *Note: the Postgres store itself (schema bootstrap, append, list-all,
//! duplicate rows) is covered by integration tests against a live database.*

#[cfg(test)]
mod tests {
    use crate::log::types::LoggedValue;
    use crate::log::writer::LogWriter;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    /// Polls the writer until `check` passes or the deadline is hit.
    async fn wait_for<F: Fn(&LogWriter) -> bool>(writer: &LogWriter, check: F) {
        for _ in 0..100 {
            if check(writer) {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("writer did not reach expected state: {:?}", writer.counters());
    }

    // ============================================================
    // WRITE PATH
    // ============================================================

    #[tokio::test]
    async fn test_submissions_reach_the_sink() {
        let seen = Arc::new(AtomicU64::new(0));
        let sink_seen = seen.clone();
        let writer = LogWriter::spawn_with_sink(16, move |index| {
            let seen = sink_seen.clone();
            async move {
                seen.fetch_add(index as u64, Ordering::SeqCst);
                Ok(())
            }
        });

        writer.submit(8);
        writer.submit(8);
        writer.submit(5);

        wait_for(&writer, |w| w.counters().written == 3).await;
        let counters = writer.counters();
        assert_eq!(counters.enqueued, 3);
        assert_eq!(counters.dropped, 0);
        assert_eq!(counters.failed, 0);
        // Duplicates are preserved: 8 + 8 + 5
        assert_eq!(seen.load(Ordering::SeqCst), 21);
    }

    // ============================================================
    // FAILURE CHANNEL
    // ============================================================

    #[tokio::test]
    async fn test_sink_errors_are_counted_not_retried() {
        let writer = LogWriter::spawn_with_sink(16, |_index| async {
            Err(anyhow::anyhow!("store unreachable"))
        });

        writer.submit(1);
        writer.submit(2);

        wait_for(&writer, |w| w.counters().failed == 2).await;
        let counters = writer.counters();
        assert_eq!(counters.enqueued, 2);
        assert_eq!(counters.written, 0);
    }

    #[tokio::test]
    async fn test_full_queue_drops_and_counts() {
        // Sink that never completes, so the consumer stays stuck on the first
        // entry and the queue (capacity 1) fills up behind it.
        let writer = LogWriter::spawn_with_sink(1, |_index| async {
            std::future::pending::<()>().await;
            Ok(())
        });

        writer.submit(1);
        // Give the consumer time to pull entry 1 into the stuck sink.
        tokio::time::sleep(Duration::from_millis(100)).await;
        writer.submit(2); // fills the queue
        writer.submit(3); // no room left

        let counters = writer.counters();
        assert_eq!(counters.enqueued, 2);
        assert_eq!(counters.dropped, 1);
        assert_eq!(counters.written, 0);
    }

    // ============================================================
    // ROW SERIALIZATION
    // ============================================================

    #[test]
    fn test_logged_value_serializes_to_number_object() {
        let json = serde_json::to_string(&LoggedValue { number: 8 }).unwrap();
        assert_eq!(json, r#"{"number":8}"#);
    }
}
