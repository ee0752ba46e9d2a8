//! Brute-force exact solver.
//!
//! # Algorithm
//!
//! Enumerates permutations in lexicographic order and keeps the first one
//! with strictly minimal length. For closed tours index 0 is held at the
//! front: every rotation of a cycle has the same length, so only the
//! remaining n-1 indices are permuted. Mirror images are not deduplicated.
//!
//! # Complexity
//!
//! O((n-1)! · n) for closed tours, O(n! · n) for open paths. There is no hard
//! size limit; callers are expected to keep n small.

use crate::distance::DistanceMatrix;
use crate::evaluation::route_length;
use crate::models::AUTO_BRUTEFORCE_LIMIT;

/// Returns a minimum-length route over all points and its length.
///
/// For fewer than two points the identity route is returned.
///
/// # Examples
///
/// ```
/// use u_tour::models::Point;
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::evaluation::route_length;
/// use u_tour::exact::brute_force;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(2.0, 1.0),
///     Point::new(2.0, 0.0),
///     Point::new(0.0, 1.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// let (route, len) = brute_force(&dm, true);
/// assert_eq!(route[0], 0);
/// assert!((len - 6.0).abs() < 1e-10);
/// assert!((route_length(&route, &dm, true) - len).abs() < 1e-10);
/// ```
pub fn brute_force(distances: &DistanceMatrix, closed: bool) -> (Vec<usize>, f64) {
    let n = distances.size();
    if n < 2 {
        return ((0..n).collect(), 0.0);
    }
    if n > AUTO_BRUTEFORCE_LIMIT {
        log::warn!("brute_force: n={n} exceeds {AUTO_BRUTEFORCE_LIMIT}, search is factorial");
    }

    // closed tours keep index 0 in front
    let fixed = usize::from(closed);
    let mut current: Vec<usize> = (0..n).collect();
    let mut best = current.clone();
    let mut best_len = route_length(&current, distances, closed);
    let mut evaluated: u64 = 1;

    while next_permutation(&mut current[fixed..]) {
        evaluated += 1;
        let len = route_length(&current, distances, closed);
        if len < best_len {
            best_len = len;
            best.copy_from_slice(&current);
        }
    }

    log::debug!("brute_force: n={n} closed={closed} evaluated={evaluated} best={best_len:.3}");
    (best, best_len)
}

/// Rearranges `items` into the next lexicographic permutation.
///
/// Returns `false` (leaving `items` untouched) when it is already the last
/// one.
fn next_permutation(items: &mut [usize]) -> bool {
    let n = items.len();
    if n < 2 {
        return false;
    }
    let mut i = n - 1;
    while i > 0 && items[i - 1] >= items[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let mut j = n - 1;
    while items[j] <= items[i - 1] {
        j -= 1;
    }
    items.swap(i - 1, j);
    items[i..].reverse();
    true
}
