//! Local search operators for improving routes.
//!
//! - [`two_opt_improve`] — 2-opt edge reversal to a local optimum
//! - [`TwoOptSearch`] — The same search, one applied reversal per step

mod two_opt;

pub use two_opt::{two_opt_improve, TwoOptSearch, IMPROVEMENT_EPSILON};
