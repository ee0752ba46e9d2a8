//! Distance tables.
//!
//! Provides a dense Euclidean distance matrix, built once per solve call.

mod matrix;

pub use matrix::DistanceMatrix;
