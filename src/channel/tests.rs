//! Event Channel Tests
//!
//! Covers the wire format and the disconnected behavior of both channel ends.
//!
//! *Note: actual delivery (publish order, at-most-once drop with no subscriber)
//! is exercised against a live broker in integration tests.*

#[cfg(test)]
mod tests {
    use crate::channel::publisher::EventPublisher;
    use crate::channel::subscriber::EventSubscriber;
    use crate::channel::types::WorkEvent;
    use crate::transport::RetryPolicy;
    use std::time::Duration;

    fn unreachable_client() -> redis::Client {
        redis::Client::open("redis://127.0.0.1:1/").unwrap()
    }

    // ============================================================
    // WIRE FORMAT
    // ============================================================

    #[test]
    fn test_payload_is_decimal_index() {
        assert_eq!(WorkEvent::new(8).payload(), "8");
        assert_eq!(WorkEvent::new(0).payload(), "0");
    }

    #[test]
    fn test_parse_round_trips_payload() {
        let event = WorkEvent::new(40);

        let parsed = WorkEvent::parse(&event.payload()).unwrap();

        assert_eq!(parsed, event);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(WorkEvent::parse("fib").is_err());
        assert!(WorkEvent::parse("").is_err());
        assert!(WorkEvent::parse("-3").is_err());
        assert!(WorkEvent::parse("8.5").is_err());
    }

    // ============================================================
    // DISCONNECTED BEHAVIOR
    // ============================================================

    #[tokio::test]
    async fn test_publish_fails_cleanly_when_disconnected() {
        let publisher = EventPublisher::new(unreachable_client());

        let result = publisher.publish(&WorkEvent::new(8)).await;

        assert!(result.is_err());
        assert!(!publisher.is_connected().await);
    }

    #[tokio::test]
    async fn test_subscribe_retry_limit_gives_up() {
        let subscriber = EventSubscriber::new(unreachable_client());
        let retry = RetryPolicy {
            limit: 2,
            backoff: Duration::from_millis(10),
        };

        assert!(subscriber.subscribe_with_retry(&retry).await.is_none());
    }
}
