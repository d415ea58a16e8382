//! Durable Log Module
//!
//! Append-only store of every index ever submitted, backed by a single
//! Postgres table with one integer column. No primary key, no uniqueness
//! constraint: the log is an unordered multiset, and submitting the same index
//! twice yields two rows. It is the one component that survives restarts of
//! everything else.
//!
//! ## Submodules
//! - **`store`**: The Postgres-backed log itself (schema bootstrap, append,
//!   list-all).
//! - **`writer`**: Bounded-queue asynchronous dispatcher used by ingestion, so
//!   log appends never block a request and dropped or failed appends are
//!   counted rather than only console-logged.

pub mod store;
pub mod types;
pub mod writer;

#[cfg(test)]
mod tests;
