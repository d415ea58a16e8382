//! Work Event Wire Format
//!
//! A work event exists only in transit: it has no identity and no persistence.
//! On the wire it is the decimal index string, published on the `insert` topic.

use anyhow::Result;

/// Pub/sub topic carrying work events.
pub const WORK_TOPIC: &str = "insert";

/// Notification that an index was submitted and needs computing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkEvent {
    pub index: u32,
}

impl WorkEvent {
    pub fn new(index: u32) -> Self {
        Self { index }
    }

    /// Message payload as published on the topic.
    pub fn payload(&self) -> String {
        self.index.to_string()
    }

    /// Parses a received payload. Fails on anything that is not a non-negative
    /// decimal integer; the subscriber logs and drops such messages.
    pub fn parse(payload: &str) -> Result<Self> {
        let index = payload
            .parse::<u32>()
            .map_err(|err| anyhow::anyhow!("invalid work event payload {:?}: {}", payload, err))?;
        Ok(Self { index })
    }
}
