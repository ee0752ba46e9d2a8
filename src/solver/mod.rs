//! Route search entry points.
//!
//! - [`find_path`] — Resolve the strategy, run it, return the re-ordered points
//! - [`find_path_step`] — The same search as a lazy iterator of intermediate routes
//! - [`SolveOptions`] — Strategy, open/closed flag, and time budget
//!
//! # Strategy selection
//!
//! | Strategy | Algorithm |
//! |---|---|
//! | `auto` | `bruteforce` for n ≤ 10, else `nearest_two_opt` |
//! | `bruteforce` | [`brute_force`](crate::exact::brute_force) |
//! | `nearest` | [`nearest_neighbor`](crate::constructive::nearest_neighbor) |
//! | `two_opt` | [`two_opt_improve`](crate::local_search::two_opt_improve) from the identity order |
//! | `nearest_two_opt` | nearest-neighbor, then 2-opt on its result |
//!
//! Each heuristic phase gets the full time budget, counted from when that
//! phase starts.

mod find_path;
mod options;
mod steps;

pub use find_path::find_path;
pub use options::SolveOptions;
pub use steps::{find_path_step, PathSteps};
