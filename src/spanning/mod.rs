//! Spanning trees over point sets, for visualization overlays.

mod prim;

pub use prim::{compute_mst, prim};
