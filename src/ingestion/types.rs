//! Ingestion Data Types
//!
//! Request/response DTOs for the ingestion endpoints and the synchronous
//! rejection taxonomy. Transport and computation failures never surface here;
//! only validation is reported to the caller.

use serde::{Deserialize, Serialize};

/// Highest index accepted for computation.
///
/// The worker's `fib` is doubly recursive, so the cost of one job roughly
/// doubles per index step; this bound caps the worst case. Raising it requires
/// re-deriving that cost, not just editing the constant.
pub const MAX_INDEX: i64 = 40;

/// Body of `POST /submit`.
///
/// Deserialization itself rejects missing or non-numeric input; range checks
/// happen in [`validate_index`].
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub index: i64,
}

/// Acknowledgment returned by `POST /submit`.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmitResponse {
    pub fn accepted() -> Self {
        Self {
            accepted: true,
            error: None,
        }
    }

    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            accepted: false,
            error: Some(error.into()),
        }
    }
}

/// Synchronous rejection reasons. Never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("index must be a non-negative integer")]
    Negative,
    #[error("Index too high")]
    TooHigh,
}

/// Checks a submitted index against the accepted range `0..=MAX_INDEX`.
pub fn validate_index(raw: i64) -> Result<u32, ValidationError> {
    if raw < 0 {
        return Err(ValidationError::Negative);
    }
    if raw > MAX_INDEX {
        return Err(ValidationError::TooHigh);
    }
    Ok(raw as u32)
}
