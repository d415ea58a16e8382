//! Asynchronous Fibonacci Compute Pipeline
//!
//! This library crate defines the components of the pipeline. It is shared by the
//! two binaries: the ingestion service (`fib-server`) and the compute worker
//! (`fib-worker`).
//!
//! ## Architecture Modules
//! The system is composed of five loosely coupled subsystems:
//!
//! - **`ingestion`**: The HTTP intake layer. Validates submitted indices, records
//!   them, and emits work events for the compute worker.
//! - **`cache`**: Client for the shared result cache (a Redis hash). Holds a
//!   placeholder per accepted index until the worker overwrites it with the
//!   computed value.
//! - **`channel`**: The fire-and-forget work event transport (Redis pub/sub).
//!   At-most-once: an event published with no subscriber attached is lost.
//! - **`log`**: The durable submission log (a single Postgres table). Append-only,
//!   duplicates permitted, survives restarts of everything else.
//! - **`worker`**: The compute side. Subscribes to work events, runs the
//!   (intentionally expensive) Fibonacci recursion, and writes results back into
//!   the cache.
//!
//! Ingestion and the worker run as independent processes with no shared in-process
//! state; all coordination goes through the cache, channel, and log.

pub mod cache;
pub mod channel;
pub mod config;
pub mod ingestion;
pub mod log;
pub mod transport;
pub mod worker;
