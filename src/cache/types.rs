//! Cache Entry Representation
//!
//! The cache is the Redis hash `values`, keyed by the decimal index string.
//! Field values are strings: the placeholder sentinel until the worker finishes,
//! then the decimal result. Clients of `GET /values/current` receive these
//! strings verbatim.

/// Redis hash holding all cache entries.
pub const VALUES_KEY: &str = "values";

/// Sentinel value for an entry that has been accepted but not yet computed.
pub const PLACEHOLDER: &str = "Nothing yet!";

/// State of a single cache entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    /// Accepted, not yet computed.
    Placeholder,
    /// Final result, written exclusively by the compute worker.
    Computed(u64),
}

impl EntryState {
    /// The string stored in the hash field.
    pub fn encode(&self) -> String {
        match self {
            EntryState::Placeholder => PLACEHOLDER.to_string(),
            EntryState::Computed(value) => value.to_string(),
        }
    }

    /// Inverse of [`encode`](Self::encode). Anything that is not a decimal
    /// number reads as a placeholder.
    pub fn decode(raw: &str) -> Self {
        match raw.parse::<u64>() {
            Ok(value) => EntryState::Computed(value),
            Err(_) => EntryState::Placeholder,
        }
    }
}
