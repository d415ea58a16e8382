//! The Expensive Unit of Work
//!
//! Canonical naive Fibonacci: `fib(0) = 1`, `fib(1) = 1`,
//! `fib(n) = fib(n-1) + fib(n-2)`.
//!
//! The exponential running time is intentional and load-bearing: the ingestion
//! service's admission bound (`MAX_INDEX`) caps the worst case of exactly this
//! algorithm. Do not replace it with an iterative or closed-form version
//! without re-deriving that bound.

/// Computes the `index`-th value of the sequence by double recursion.
pub fn fib(index: u32) -> u64 {
    if index < 2 {
        return 1;
    }
    fib(index - 1) + fib(index - 2)
}
