//! Result Cache Tests
//!
//! Validates the entry encoding and the degraded-mode behavior of the client.
//!
//! *Note: operations against a live Redis (placeholder-then-computed overwrite,
//! snapshot contents) are covered by integration tests outside the unit suite.*

#[cfg(test)]
mod tests {
    use crate::cache::client::ResultCache;
    use crate::cache::types::{EntryState, PLACEHOLDER};
    use crate::transport::{RetryPolicy, TransportStatus};
    use std::time::Duration;

    /// A client pointed at a port nothing listens on. Construction is lazy, so
    /// no connection attempt happens here.
    fn unreachable_cache() -> ResultCache {
        let client = redis::Client::open("redis://127.0.0.1:1/").unwrap();
        ResultCache::new(client)
    }

    // ============================================================
    // ENTRY STATE ENCODING
    // ============================================================

    #[test]
    fn test_placeholder_encodes_to_sentinel() {
        assert_eq!(EntryState::Placeholder.encode(), PLACEHOLDER);
    }

    #[test]
    fn test_computed_encodes_to_decimal_string() {
        assert_eq!(EntryState::Computed(34).encode(), "34");
        assert_eq!(EntryState::Computed(165_580_141).encode(), "165580141");
    }

    #[test]
    fn test_decode_round_trips_both_states() {
        assert_eq!(EntryState::decode(PLACEHOLDER), EntryState::Placeholder);
        assert_eq!(EntryState::decode("34"), EntryState::Computed(34));
    }

    #[test]
    fn test_decode_treats_unknown_values_as_placeholder() {
        // A value that is neither the sentinel nor a number still reads as
        // "not yet computed" rather than failing.
        assert_eq!(EntryState::decode("garbage"), EntryState::Placeholder);
        assert_eq!(EntryState::decode(""), EntryState::Placeholder);
        assert_eq!(EntryState::decode("-5"), EntryState::Placeholder);
    }

    // ============================================================
    // DEGRADED MODE
    // ============================================================

    #[tokio::test]
    async fn test_snapshot_is_empty_when_disconnected() {
        let cache = unreachable_cache();

        let snapshot = cache.snapshot().await;

        assert!(snapshot.is_empty());
    }

    #[tokio::test]
    async fn test_writes_fail_cleanly_when_disconnected() {
        let cache = unreachable_cache();

        assert!(cache.set_placeholder(5).await.is_err());
        assert!(cache.set_computed(5, 8).await.is_err());
        assert!(!cache.is_connected().await);
    }

    #[tokio::test]
    async fn test_connect_retry_limit_gives_up() {
        let cache = unreachable_cache();
        let retry = RetryPolicy {
            limit: 2,
            backoff: Duration::from_millis(10),
        };

        let status = cache.connect_with_retry(&retry).await;

        assert_eq!(status, TransportStatus::Degraded);
        assert!(!cache.is_connected().await);
    }
}
