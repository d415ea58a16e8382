//! Ingestion Service Module
//!
//! HTTP intake for the compute pipeline.
//!
//! ## Workflow
//! 1. **Validate**: Rejects malformed, negative, or over-bound indices.
//! 2. **Placeholder**: Writes "accepted, not yet computed" into the result cache.
//! 3. **Record**: Enqueues the index to the durable log writer.
//! 4. **Notify**: Publishes a work event for the compute worker.
//!
//! The contract of a successful submission is "accepted for processing", not
//! "durably recorded": each of steps 2-4 is best-effort, and a failure there is
//! logged (and counted, for the log) without failing the request.

pub mod handlers;
pub mod types;
