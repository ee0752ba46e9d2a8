//! Constructive heuristics for building initial routes.
//!
//! - [`nearest_neighbor`] — Multi-start greedy nearest-neighbor, O(n³) for all starts
//! - [`NearestNeighborSearch`] — The same search, one start per step

mod nearest_neighbor;

pub use nearest_neighbor::{greedy_route, nearest_neighbor, NearestNeighborSearch};
