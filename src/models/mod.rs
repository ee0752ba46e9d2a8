//! Domain model types for route search.
//!
//! Provides points and the coercion of loosely typed point input, the
//! strategy enumeration, and the wall-clock budget that bounds heuristic
//! work.

mod budget;
mod point;
mod strategy;

pub use budget::{Deadline, TimeBudget};
pub use point::{coerce_points, AsPoint, Point};
pub use strategy::{Algorithm, Strategy, AUTO_BRUTEFORCE_LIMIT};
