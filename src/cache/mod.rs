//! Result Cache Module
//!
//! Client for the shared key-value cache mapping a submitted index to either a
//! placeholder ("accepted, not yet computed") or the computed result. The cache
//! is a single Redis hash; it is volatile and rebuildable from the durable log
//! plus recomputation, so a missing or unreachable cache is treated as "no
//! entries", never as an error for reads.
//!
//! ## Write Discipline
//! - Ingestion writes only `Placeholder` entries, at submission time.
//! - The worker writes only `Computed` entries, overwriting the placeholder.
//!
//! No two components ever race on the same transition, so last-write-wins is
//! sufficient and no locking is needed.

pub mod client;
pub mod types;

#[cfg(test)]
mod tests;
