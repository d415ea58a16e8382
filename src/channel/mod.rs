//! Event Channel Module
//!
//! Fire-and-forget transport carrying "index submitted" notifications from the
//! ingestion service to the compute worker, implemented over Redis pub/sub on a
//! single named topic.
//!
//! ## Delivery Contract
//! - **At-most-once**: publish does not block, and a message published while no
//!   subscriber is attached is dropped silently. No acknowledgment, no
//!   redelivery, no dead-letter handling.
//! - A single producer's messages reach the single consumer in publish order.
//!
//! This lossiness is a deliberate trade-off; the submission log remains the
//! record of intent even when an event is lost.

pub mod publisher;
pub mod subscriber;
pub mod types;

#[cfg(test)]
mod tests;
