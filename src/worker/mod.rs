//! Compute Worker Module
//!
//! The consuming side of the pipeline. A single worker holds one long-lived
//! subscription to the event channel and processes work events serially, in
//! arrival order:
//!
//! 1. Parse the submitted index out of the event payload.
//! 2. Compute `fib(index)` with the naive doubly-recursive definition.
//! 3. Overwrite the cache entry for that index with the result.
//!
//! A result that cannot be persisted is logged and dropped, with no retry or
//! requeue; that loss is acceptable given the channel's own at-most-once
//! semantics. There is no cancellation: a dequeued job runs to completion.
//!
//! ## Submodules
//! - **`compute`**: The expensive unit of work itself.
//! - **`runner`**: Subscription lifecycle and the event loop.

pub mod compute;
pub mod runner;
