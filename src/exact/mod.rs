//! Exact route search.
//!
//! - [`brute_force`] — Exhaustive permutation enumeration, O((n-1)!) closed / O(n!) open

mod brute_force;

pub use brute_force::brute_force;
