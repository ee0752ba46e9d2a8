//! 2-opt edge-reversal improvement.
//!
//! # Algorithm
//!
//! For each pair of positions `i < k`, compare the edges `(a, b)` and `(c, d)`
//! with the reconnection `(a, c)` and `(b, d)`, where
//! `a = r[i-1]`, `b = r[i]`, `c = r[k]` and `d = r[k+1]` (or `r[0]` when the
//! tour is closed and `k` is the last position):
//!
//! ```text
//! delta = d(a, c) + d(b, d) - d(a, b) - d(c, d)
//! ```
//!
//! If the reconnection is shorter by more than [`IMPROVEMENT_EPSILON`], the
//! segment `r[i..=k]` is reversed in place and the scan continues from the
//! next `k` (first improvement). A pass that applied at least one reversal is
//! followed by another full pass; a pass with none ends the search.
//!
//! Position 0 is never moved: for closed tours it is the fixed origin, and for
//! open paths it has no incoming edge to remove. Open paths also keep their
//! last position, which has no outgoing edge.
//!
//! # Complexity
//!
//! O(n²) per pass, O(n³) worst case for convergence.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::DistanceMatrix;
use crate::evaluation::route_length;
use crate::models::{Deadline, TimeBudget};

/// Minimum gain for a reversal to count as an improvement.
pub const IMPROVEMENT_EPSILON: f64 = 1e-12;

/// Applies 2-opt improvement to a route until a local optimum or the budget.
///
/// Returns the improved route and its length. Routes with fewer than four
/// indices have no 2-opt move and are returned unchanged. The result is never
/// longer than the input.
///
/// # Examples
///
/// ```
/// use u_tour::models::{Point, TimeBudget};
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::evaluation::route_length;
/// use u_tour::local_search::two_opt_improve;
///
/// // A crossed square: 0 → 2 → 1 → 3 → 0
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// let (improved, len) = two_opt_improve(&[0, 2, 1, 3], &dm, true, TimeBudget::UNLIMITED);
/// assert!((len - 4.0).abs() < 1e-10);
/// assert_eq!(improved[0], 0);
/// assert!(len < route_length(&[0, 2, 1, 3], &dm, true));
/// ```
pub fn two_opt_improve(
    route: &[usize],
    distances: &DistanceMatrix,
    closed: bool,
    budget: TimeBudget,
) -> (Vec<usize>, f64) {
    let mut search = TwoOptSearch::new(route.to_vec(), closed, budget);
    while search.step(distances).is_some() {}
    let improved = search.into_route();
    let len = route_length(&improved, distances, closed);
    (improved, len)
}

/// A resumable 2-opt search that owns the route it refines.
///
/// Each call to [`step`](Self::step) scans forward until it applies one
/// improving reversal and returns a copy of the route after it, so a caller
/// can show every swap.
///
/// # Examples
///
/// ```
/// use u_tour::models::{Point, TimeBudget};
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::local_search::TwoOptSearch;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// let mut search = TwoOptSearch::new(vec![0, 2, 1, 3], true, TimeBudget::UNLIMITED);
/// let swaps: Vec<_> = search.swaps(&dm).collect();
/// assert_eq!(swaps.len(), 1);
/// assert_eq!(search.route(), swaps[0].as_slice());
/// ```
#[derive(Debug, Clone)]
pub struct TwoOptSearch {
    route: Vec<usize>,
    closed: bool,
    budget: TimeBudget,
    deadline: Option<Deadline>,
    i: usize,
    k: usize,
    improved_this_pass: bool,
    passes: usize,
    swaps_applied: usize,
    finished: bool,
}

impl TwoOptSearch {
    /// Creates a search refining `route`.
    ///
    /// The budget clock starts on the first call to [`step`](Self::step).
    pub fn new(route: Vec<usize>, closed: bool, budget: TimeBudget) -> Self {
        Self {
            route,
            closed,
            budget,
            deadline: None,
            i: 1,
            k: 2,
            improved_this_pass: false,
            passes: 0,
            swaps_applied: 0,
            finished: false,
        }
    }

    /// Scans until one improving reversal is applied and returns the route
    /// after it.
    ///
    /// Returns `None` at a local optimum, when the budget expires, or when
    /// the route has fewer than four indices.
    pub fn step(&mut self, distances: &DistanceMatrix) -> Option<Vec<usize>> {
        if self.finished {
            return None;
        }
        let n = self.route.len();
        if n < 4 {
            self.finish();
            return None;
        }

        let budget = self.budget;
        let deadline = *self.deadline.get_or_insert_with(|| budget.start());
        let last_i = n - 2;
        let last_k = if self.closed { n - 1 } else { n - 2 };

        loop {
            if self.i > last_i {
                self.passes += 1;
                if !self.improved_this_pass {
                    self.finish();
                    return None;
                }
                self.improved_this_pass = false;
                self.i = 1;
                self.k = 2;
                continue;
            }
            if self.k > last_k {
                self.i += 1;
                self.k = self.i + 1;
                continue;
            }
            if deadline.expired() {
                log::debug!(
                    "two_opt: budget expired after {} passes, {} swaps in {:?}",
                    self.passes,
                    self.swaps_applied,
                    deadline.elapsed()
                );
                self.finish();
                return None;
            }

            let (i, k) = (self.i, self.k);
            self.k += 1;
            let gain = self.gain(distances, i, k);
            if gain > IMPROVEMENT_EPSILON {
                self.route[i..=k].reverse();
                self.improved_this_pass = true;
                self.swaps_applied += 1;
                log::trace!("two_opt: reversed [{i}..={k}] gain={gain:.6}");
                return Some(self.route.clone());
            }
        }
    }

    /// Drives the search from an iterator, one route per applied reversal.
    pub fn swaps<'a>(
        &'a mut self,
        distances: &'a DistanceMatrix,
    ) -> impl Iterator<Item = Vec<usize>> + 'a {
        std::iter::from_fn(move || self.step(distances))
    }

    /// Length saved by reversing `route[i..=k]`.
    fn gain(&self, distances: &DistanceMatrix, i: usize, k: usize) -> f64 {
        let n = self.route.len();
        let a = self.route[i - 1];
        let b = self.route[i];
        let c = self.route[k];
        let d = self.route[(k + 1) % n];

        let before = distances.get(a, b) + distances.get(c, d);
        let after = distances.get(a, c) + distances.get(b, d);
        before - after
    }

    /// The route in its current state.
    pub fn route(&self) -> &[usize] {
        &self.route
    }

    /// Number of reversals applied so far.
    pub fn swaps_applied(&self) -> usize {
        self.swaps_applied
    }

    /// Returns `true` once the search has stopped.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Consumes the search, returning the route in its current state.
    pub fn into_route(self) -> Vec<usize> {
        self.route
    }

    fn finish(&mut self) {
        if !self.finished {
            self.finished = true;
            log::debug!(
                "two_opt: done n={} closed={} passes={} swaps={}",
                self.route.len(),
                self.closed,
                self.passes,
                self.swaps_applied
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::models::Point;

    fn square() -> DistanceMatrix {
        DistanceMatrix::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ])
    }

    fn scattered() -> DistanceMatrix {
        DistanceMatrix::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(9.0, 7.0),
            Point::new(2.0, 8.0),
            Point::new(8.0, 1.0),
            Point::new(4.0, 4.0),
            Point::new(1.0, 5.0),
            Point::new(7.0, 9.0),
            Point::new(5.0, 0.5),
        ])
    }

    #[test]
    fn test_already_optimal() {
        let dm = square();
        let (improved, len) = two_opt_improve(&[0, 1, 2, 3], &dm, true, TimeBudget::UNLIMITED);
        assert_eq!(improved, vec![0, 1, 2, 3]);
        assert!((len - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_uncrosses_closed() {
        let dm = square();
        let (improved, len) = two_opt_improve(&[0, 2, 1, 3], &dm, true, TimeBudget::UNLIMITED);
        assert_eq!(improved, vec![0, 1, 2, 3]);
        assert!((len - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_uncrosses_open() {
        // 0 → 2 → 1 → 3 on a line crosses itself; open 2-opt keeps both ends.
        let points: Vec<Point> = (0..4).map(|i| Point::new(i as f64, 0.0)).collect();
        let dm = DistanceMatrix::from_points(&points);
        let (improved, len) = two_opt_improve(&[0, 2, 1, 3], &dm, false, TimeBudget::UNLIMITED);
        assert_eq!(improved, vec![0, 1, 2, 3]);
        assert!((len - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_short_routes_unchanged() {
        let dm = square();
        assert_eq!(
            two_opt_improve(&[], &dm, true, TimeBudget::UNLIMITED).0,
            Vec::<usize>::new()
        );
        assert_eq!(
            two_opt_improve(&[2, 0, 1], &dm, true, TimeBudget::UNLIMITED).0,
            vec![2, 0, 1]
        );
    }

    #[test]
    fn test_does_not_worsen() {
        let dm = scattered();
        for closed in [true, false] {
            let initial: Vec<usize> = vec![3, 6, 0, 2, 7, 1, 5, 4];
            let initial_len = route_length(&initial, &dm, closed);
            let (improved, len) = two_opt_improve(&initial, &dm, closed, TimeBudget::UNLIMITED);
            assert!(len <= initial_len + 1e-10);
            assert_eq!(improved[0], initial[0]);
            let mut sorted = improved.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..8).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_open_keeps_endpoints() {
        let dm = scattered();
        let initial: Vec<usize> = vec![3, 6, 0, 2, 7, 1, 5, 4];
        let (improved, _) = two_opt_improve(&initial, &dm, false, TimeBudget::UNLIMITED);
        assert_eq!(improved[0], 3);
        assert_eq!(improved[7], 4);
    }

    #[test]
    fn test_local_optimum_has_no_improving_move() {
        let dm = scattered();
        let initial: Vec<usize> = (0..8).collect();
        let (improved, _) = two_opt_improve(&initial, &dm, true, TimeBudget::UNLIMITED);
        let mut search = TwoOptSearch::new(improved.clone(), true, TimeBudget::UNLIMITED);
        assert!(search.step(&dm).is_none());
        assert_eq!(search.into_route(), improved);
    }

    #[test]
    fn test_each_swap_shortens() {
        let dm = scattered();
        let initial: Vec<usize> = vec![0, 4, 1, 7, 2, 6, 3, 5];
        let mut prev = route_length(&initial, &dm, true);
        let mut search = TwoOptSearch::new(initial, true, TimeBudget::UNLIMITED);
        let mut count = 0;
        for route in search.swaps(&dm) {
            let len = route_length(&route, &dm, true);
            assert!(len < prev);
            prev = len;
            count += 1;
        }
        assert!(count > 0);
        assert_eq!(search.swaps_applied(), count);
        assert!(search.is_finished());
    }

    #[test]
    fn test_expired_budget_returns_input() {
        let dm = scattered();
        let initial: Vec<usize> = vec![0, 4, 1, 7, 2, 6, 3, 5];
        let mut search = TwoOptSearch::new(initial.clone(), true, TimeBudget::new(Duration::ZERO));
        // start the clock, then let it run out before the first probe
        let _ = search.deadline.get_or_insert_with(|| TimeBudget::new(Duration::ZERO).start());
        std::thread::sleep(Duration::from_millis(2));
        assert!(search.step(&dm).is_none());
        assert_eq!(search.into_route(), initial);
    }
}
