//! # u-tour
//!
//! Route search over 2D points for interactive front-ends: finds a good (or
//! optimal) visiting order for closed tours and open paths, fast enough to
//! rerun after every edit, with a step-wise variant that surfaces each
//! intermediate route for animation.
//!
//! ## Modules
//!
//! - [`models`] — Point, point-like input coercion, strategy, time budget
//! - [`distance`] — Euclidean distance matrix
//! - [`evaluation`] — Open and closed route length
//! - [`exact`] — Brute-force optimal search for small inputs
//! - [`constructive`] — Multi-start nearest-neighbor construction
//! - [`local_search`] — 2-opt improvement
//! - [`spanning`] — Minimum spanning tree (Prim) for overlays
//! - [`solver`] — `find_path`, `find_path_step`, and their options
//!
//! ## Example
//!
//! ```
//! use u_tour::{find_path, SolveOptions, Strategy};
//!
//! let points = vec![(0.0, 0.0), (2.0, 1.0), (2.0, 0.0), (0.0, 1.0)];
//! let options = SolveOptions::default().with_strategy(Strategy::NearestTwoOpt);
//! let route = find_path(&points, &options).unwrap();
//! assert_eq!(route.len(), 4);
//! ```

pub mod constructive;
pub mod distance;
mod error;
pub mod evaluation;
pub mod exact;
pub mod local_search;
pub mod models;
pub mod solver;
pub mod spanning;

#[cfg(feature = "ffi")]
pub mod ffi;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Result, TourError};
pub use models::{Point, Strategy, TimeBudget};
pub use solver::{find_path, find_path_step, PathSteps, SolveOptions};
pub use spanning::compute_mst;
