//! Route length evaluation.

mod length;

pub use length::route_length;
